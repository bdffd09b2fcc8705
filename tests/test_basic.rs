use fsmgen::fsm_diagram;

/// off --> on: Turn on
/// on --> off: Turn off
#[fsm_diagram]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switch(pub &'static str);

#[test]
fn test_basic() {
    assert_eq!(Switch::ALL, &[Switch::OFF, Switch::ON]);
    assert_eq!(Switch::OFF.turn_on(), Ok(Switch::ON));
    assert_eq!(Switch::ON.turn_off(), Ok(Switch::OFF));
    assert!(!Switch::OFF.is_terminal());
}
