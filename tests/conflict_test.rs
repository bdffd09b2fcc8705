#[allow(dead_code)]
#[cfg(test)]
mod tests {
    use fsmgen::fsm_diagram;

    // Machine 1
    /// idle --> running: Start
    #[fsm_diagram]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Light(pub &'static str);

    // Machine 2
    /// idle --> running: Start
    #[fsm_diagram(gen_dynamic = true)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Pump(pub &'static str);

    #[test]
    fn test_no_conflict() {
        // Generated items are named after each type
        let _e1: Result<Light, LightError> = Light::IDLE.start();
        let _e2: Result<Pump, PumpError> = Pump::IDLE.start();
        let _ev: PumpEvent = PumpEvent::Start;

        assert_eq!(Light::IDLE.start(), Ok(Light::RUNNING));
        assert_eq!(Pump::IDLE.fire(PumpEvent::Start), Ok(Pump::RUNNING));
    }
}
