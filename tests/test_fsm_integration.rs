use fsmgen::fsm_diagram;

/// still --> moving: Move
/// moving --> moving: Move
/// moving --> still: Stop
/// moving --> crash
#[fsm_diagram(gen_dynamic = true)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vehicle(pub &'static str);

#[test]
fn test_fsm_full_lifecycle() {
    let state = Vehicle::parse("still").unwrap();
    assert_eq!(state, Vehicle::STILL);

    // still -> moving
    let state = state.r#move().unwrap();
    assert_eq!(state, Vehicle::MOVING);

    // moving -> moving
    let state = state.r#move().unwrap();
    assert_eq!(state, Vehicle::MOVING);

    // moving -> still
    assert_eq!(state.stop(), Ok(Vehicle::STILL));

    // moving -> crash
    let state = state.to_crash().unwrap();
    assert_eq!(state, Vehicle::CRASH);
    assert!(state.is_terminal());
}

#[test]
fn test_fsm_prohibited_event() {
    let err = Vehicle::CRASH.stop().unwrap_err();
    assert_eq!(
        err,
        VehicleError::ProhibitedEvent {
            state: Vehicle::CRASH,
            event: "Stop",
        }
    );
    assert_eq!(err.to_string(), "prohibited event 'Stop' in state 'crash'");

    assert_eq!(
        Vehicle::STILL.to_crash(),
        Err(VehicleError::ProhibitedEvent {
            state: Vehicle::STILL,
            event: "ToCrash",
        })
    );
}

#[test]
fn test_fsm_unknown_state() {
    let parked = Vehicle("parked");
    assert_eq!(
        parked.stop(),
        Err(VehicleError::UnknownState("parked".to_string()))
    );
    assert!(!parked.can_stop());
    assert!(parked.is_terminal());

    let err = Vehicle::parse("flying").unwrap_err();
    assert_eq!(err.to_string(), "unknown state: 'flying'");
}

#[test]
fn test_fsm_predicates() {
    assert!(Vehicle::STILL.can_move());
    assert!(!Vehicle::STILL.can_stop());
    assert!(!Vehicle::STILL.can_to_crash());
    assert!(Vehicle::MOVING.can_move());
    assert!(Vehicle::MOVING.can_stop());
    assert!(Vehicle::MOVING.can_to_crash());

    assert!(Vehicle::CRASH.is_terminal());
    assert!(!Vehicle::MOVING.is_terminal());
    assert!(!Vehicle::STILL.is_terminal());
}

#[test]
fn test_fsm_states_sorted() {
    assert_eq!(
        Vehicle::ALL,
        &[Vehicle::CRASH, Vehicle::MOVING, Vehicle::STILL]
    );
}

#[test]
fn test_fsm_dynamic_dispatch() {
    assert_eq!(
        VehicleEvent::ALL,
        &[VehicleEvent::Move, VehicleEvent::Stop, VehicleEvent::ToCrash]
    );
    assert_eq!(VehicleEvent::ToCrash.name(), "ToCrash");
    assert_eq!(VehicleEvent::parse("Stop"), Some(VehicleEvent::Stop));
    assert_eq!(VehicleEvent::parse("stop"), None);

    assert_eq!(
        Vehicle::STILL.fire(VehicleEvent::Move),
        Ok(Vehicle::MOVING)
    );
    assert!(Vehicle::CRASH.fire(VehicleEvent::Move).is_err());
    assert_eq!(Vehicle::STILL.available_events(), vec![VehicleEvent::Move]);
    assert!(Vehicle::CRASH.available_events().is_empty());
}

#[test]
fn test_fsm_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}

    let err = Vehicle::parse("nope").unwrap_err();
    assert_error(&err);
}
