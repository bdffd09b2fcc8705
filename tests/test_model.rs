use fsmgen::{Edge, InjectedFlags, Model, ModelBuilder, ParseError, State};

fn edge(src: &str, dst: &str, label: Option<&str>) -> Edge {
    Edge {
        src: src.to_string(),
        dst: dst.to_string(),
        label: label.map(str::to_string),
    }
}

fn state(identifier: &str, value: &str) -> State {
    State {
        identifier: identifier.to_string(),
        value: value.to_string(),
    }
}

fn build(edges: Vec<Edge>) -> Result<Model, ParseError> {
    ModelBuilder::new("fsm", "State").build(edges)
}

fn vehicle() -> Model {
    build(vec![
        edge("Still", "Moving", Some("Move")),
        edge("Moving", "Moving", Some("Move")),
        edge("Moving", "Still", Some("Stop")),
        edge("Moving", "Crash", None),
    ])
    .unwrap()
}

#[test]
fn test_model_states_sorted_and_deduplicated() {
    let model = vehicle();
    assert_eq!(
        model.states,
        vec![
            state("Crash", "Crash"),
            state("Moving", "Moving"),
            state("Still", "Still"),
        ]
    );
}

#[test]
fn test_model_events() {
    let model = vehicle();
    let summary: Vec<_> = model
        .events
        .iter()
        .map(|e| {
            let src: Vec<_> = e.src.iter().map(|s| s.value.as_str()).collect();
            (e.identifier.as_str(), e.value.as_str(), src, e.dst.value.as_str())
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            ("moveEvent", "Move", vec!["Still", "Moving"], "Moving"),
            ("stopEvent", "Stop", vec!["Moving"], "Still"),
            ("toCrashEvent", "ToCrash", vec!["Moving"], "Crash"),
        ]
    );
}

#[test]
fn test_model_terminal_states() {
    let model = vehicle();
    assert!(model.is_terminal("Crash"));
    assert!(!model.is_terminal("Moving"));
    assert!(!model.is_terminal("Still"));

    let from_moving: Vec<_> = model.events_from("Moving").map(|e| e.value.as_str()).collect();
    assert_eq!(from_moving, vec!["Move", "Stop", "ToCrash"]);
    assert_eq!(model.events_from("Crash").count(), 0);
    assert_eq!(model.events_from("Unknown").count(), 0);
}

#[test]
fn test_model_merges_by_destination() {
    let model = build(vec![
        edge("Still", "Moving", Some("Move")),
        edge("Moving", "Moving", Some("Move")),
    ])
    .unwrap();

    assert_eq!(model.events.len(), 1);
    let event = &model.events[0];
    assert_eq!(event.value, "Move");
    assert!(event.allows("Still"));
    assert!(event.allows("Moving"));
}

#[test]
fn test_model_same_label_different_destinations() {
    let model = build(vec![edge("A", "B", Some("X")), edge("A", "C", Some("X"))]).unwrap();

    assert_eq!(model.events.len(), 2);
    assert_eq!(model.events[0].identifier, "xEvent");
    assert_eq!(model.events[0].dst.value, "B");
    assert_eq!(model.events[1].identifier, "xEvent");
    assert_eq!(model.events[1].dst.value, "C");
}

#[test]
fn test_model_naming_collision() {
    let err = build(vec![
        edge("A", "C", Some("Go")),
        edge("B", "C", Some("Jump")),
    ])
    .unwrap_err();

    match err {
        ParseError::NamingCollision { first, second } => {
            assert_eq!(first, "goEvent");
            assert_eq!(second, "jumpEvent");
        }
        other => panic!("expected naming collision, got {other:?}"),
    }
}

#[test]
fn test_model_collision_between_label_and_default_name() {
    let err = build(vec![edge("A", "C", None), edge("B", "C", Some("Jump"))]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "conflicting names: toCEvent and jumpEvent"
    );
}

#[test]
fn test_model_duplicate_sources_kept_once() {
    let model = build(vec![edge("A", "B", None), edge("A", "B", None)]).unwrap();
    assert_eq!(model.events[0].src, vec![state("A", "A")]);
}

#[test]
fn test_model_title_cases_values() {
    let model = build(vec![edge("still", "moving", Some("start moving"))]).unwrap();
    assert_eq!(
        model.states,
        vec![state("Moving", "moving"), state("Still", "still")]
    );
    assert_eq!(model.events[0].value, "Start Moving");
    assert_eq!(model.events[0].identifier, "start MovingEvent");
    assert_eq!(model.state("still"), Some(&state("Still", "still")));
}

#[test]
fn test_model_empty() {
    let model = build(Vec::new()).unwrap();
    assert!(model.states.is_empty());
    assert!(model.events.is_empty());
}

#[test]
fn test_model_is_deterministic() {
    let edges = vec![
        edge("b", "c", None),
        edge("a", "b", Some("go")),
        edge("c", "a", Some("back")),
    ];
    let mut reversed = edges.clone();
    reversed.reverse();

    let first = build(edges).unwrap();
    let second = build(reversed).unwrap();
    assert_eq!(first.states, second.states);
    let names = |m: &Model| m.events.iter().map(|e| e.identifier.clone()).collect::<Vec<_>>();
    assert_eq!(names(&first), names(&second));
}

#[test]
fn test_model_inject_flags() {
    let model = vehicle().inject(InjectedFlags {
        module: Some("transport".to_string()),
        gen_type: true,
        gen_dynamic: true,
    });
    assert_eq!(model.namespace, "transport");
    assert!(model.gen_type);
    assert!(model.gen_dynamic);

    // An empty override keeps the located namespace
    let model = vehicle().inject(InjectedFlags {
        module: Some(String::new()),
        ..Default::default()
    });
    assert_eq!(model.namespace, "fsm");
    assert_eq!(model.type_name, "State");
    assert!(!model.gen_type);
}
