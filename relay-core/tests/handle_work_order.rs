mod common;

use common::*;
use relay_common::prelude::*;
use relay_common::{FlowOutcome, HandleWorkOrderRequest};
use relay_core::{ActiveState, Locale, Properties};
use serde_json::json;

fn approve(source: &str, target: &str) -> HandleWorkOrderRequest {
    HandleWorkOrderRequest::new(WORK_ORDER_ID, source, target, FlowOutcome::Approve)
}

#[test]
fn start_to_user_task() {
    init_logger();
    let fixture = Fixture::new(
        leave_process(),
        json!([state("start", "Start", &[CREATOR])]),
        &[],
    );

    fixture
        .service
        .handle_work_order(
            &caller(CREATOR),
            approve("start", "review")
                .with_circulation("please review")
                .with_tasks(vec!["sms".into(), "notify".into()]),
        )
        .expect("start -> review");

    let work_order = fixture.service.get_work_order(WORK_ORDER_ID).expect("work order");
    assert_eq!(
        work_order.active_states,
        vec![ActiveState {
            id: "review".into(),
            label: "Review".into(),
            processor: vec![11],
            process_method: "person".into(),
        }]
    );
    assert_eq!(work_order.related_person, vec![CREATOR]);
    assert!(!work_order.is_end);

    let history = fixture.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].source, "start");
    assert_eq!(history[0].target, "review");
    assert_eq!(history[0].state, "Start");
    assert_eq!(history[0].circulation, "please review");
    assert_eq!(history[0].processor, "user10");
    assert_eq!(history[0].processor_id, CREATOR);

    let events = fixture.queue.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].work_order_id, WORK_ORDER_ID);
    assert_eq!(events[0].tasks, vec!["sms", "notify"]);
}

#[test]
fn exclusive_gateway_selects_matching_branch() {
    init_logger();
    let fixture = Fixture::new(
        leave_process(),
        json!([state("review", "Review", &[11])]),
        &[r#"{"reason": "family"}"#, r#"{"status": "rejected"}"#],
    );

    fixture
        .service
        .handle_work_order(&caller(11), approve("review", "route"))
        .expect("review -> route");

    let work_order = fixture.service.get_work_order(WORK_ORDER_ID).expect("work order");
    assert_eq!(work_order.active_states.len(), 1);
    assert_eq!(work_order.active_states[0].id, "rejected");
    assert_eq!(work_order.active_states[0].processor, vec![13]);
    assert_eq!(work_order.active_states[0].process_method, "role");
    assert_eq!(work_order.related_person, vec![CREATOR, 11]);

    let history = fixture.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].target, "rejected");
    assert_eq!(fixture.queue.events()[0].tasks, vec!["audit"]);
}

#[test]
fn exclusive_gateway_without_matching_branch() {
    init_logger();
    let fixture = Fixture::new(
        leave_process(),
        json!([state("review", "Review", &[11])]),
        &[r#"{"status": "pending"}"#],
    );

    let err = fixture
        .service
        .handle_work_order(&caller(11), approve("review", "route"))
        .expect_err("no branch");
    assert_eq!(err.code(), ErrorCode::NoMatchingBranchCode());

    assert_eq!(fixture.active_ids(), vec!["review"]);
    assert!(fixture.history().is_empty());
    assert!(fixture.queue.events().is_empty());
}

#[test]
fn condition_on_missing_field() {
    init_logger();
    let fixture = Fixture::new(
        leave_process(),
        json!([state("review", "Review", &[11])]),
        &[],
    );

    let err = fixture
        .service
        .handle_work_order(&caller(11), approve("review", "route"))
        .expect_err("no form data");
    assert_eq!(err.code(), ErrorCode::MissingFieldCode());
}

#[test]
fn parallel_fan_out() {
    init_logger();
    let fixture = Fixture::new(
        parallel_process(),
        json!([state("start", "Start", &[CREATOR])]),
        &[],
    );

    fixture
        .service
        .handle_work_order(&caller(CREATOR), approve("start", "fork"))
        .expect("start -> fork");

    assert_eq!(fixture.active_ids(), vec!["a", "b", "c"]);
    let history = fixture.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].target, "a");
}

#[test]
fn parallel_join_commits_on_last_arrival() {
    init_logger();
    let fixture = Fixture::new(
        parallel_process(),
        json!([
            state("a", "A", &[31]),
            state("b", "B", &[32]),
            state("c", "C", &[33])
        ]),
        &[],
    );

    fixture
        .service
        .handle_work_order(&caller(32), approve("b", "join"))
        .expect("b arrives");
    assert_eq!(fixture.active_ids(), vec!["a", "b", "c"]);

    // arriving twice does not count as another branch
    fixture
        .service
        .handle_work_order(&caller(32), approve("b", "join"))
        .expect("b arrives again");
    assert_eq!(fixture.active_ids(), vec!["a", "b", "c"]);

    fixture
        .service
        .handle_work_order(&caller(31), approve("a", "join"))
        .expect("a arrives");
    assert_eq!(fixture.active_ids(), vec!["a", "b", "c"]);

    fixture
        .service
        .handle_work_order(&caller(33), approve("c", "join"))
        .expect("c arrives");

    let work_order = fixture.service.get_work_order(WORK_ORDER_ID).expect("work order");
    assert_eq!(work_order.active_states.len(), 1);
    assert_eq!(work_order.active_states[0].id, "done");
    assert_eq!(work_order.active_states[0].processor, vec![34]);
    // waiting arrivals write no related person
    assert_eq!(work_order.related_person, vec![CREATOR, 33]);

    let history = fixture.history();
    assert_eq!(history.len(), 4);
    assert!(history.iter().all(|x| x.target == "done"));
}

#[test]
fn sibling_branches_stay_active() {
    init_logger();
    let fixture = Fixture::new(
        parallel_process(),
        json!([state("a", "A", &[31]), state("b", "B", &[32])]),
        &[],
    );

    fixture
        .service
        .handle_work_order(
            &caller(32),
            HandleWorkOrderRequest::new(WORK_ORDER_ID, "b", "start", FlowOutcome::Reject),
        )
        .expect("b sent back");

    assert_eq!(fixture.active_ids(), vec!["a", "start"]);
}

#[test]
fn join_reopens_after_process_is_sent_back() {
    init_logger();
    let fixture = Fixture::new(
        parallel_process(),
        json!([state("start", "Start", &[CREATOR])]),
        &[],
    );
    let arrive_all = |round: &str| {
        for (branch, user_id) in [("a", 31), ("b", 32)] {
            fixture
                .service
                .handle_work_order(&caller(user_id), approve(branch, "join"))
                .expect(round);
            assert_eq!(fixture.active_ids(), vec!["a", "b", "c"]);
        }
        fixture
            .service
            .handle_work_order(&caller(33), approve("c", "join"))
            .expect(round);
        assert_eq!(fixture.active_ids(), vec!["done"]);
    };

    fixture
        .service
        .handle_work_order(&caller(CREATOR), approve("start", "fork"))
        .expect("first fork");
    arrive_all("first round");

    fixture
        .service
        .handle_work_order(
            &caller(34),
            HandleWorkOrderRequest::new(WORK_ORDER_ID, "done", "start", FlowOutcome::Reject),
        )
        .expect("sent back");
    fixture
        .service
        .handle_work_order(&caller(CREATOR), approve("start", "fork"))
        .expect("second fork");
    arrive_all("second round");
}

#[test]
fn countersign_branch_holds_join_until_signed() {
    init_logger();
    let mut process = parallel_process();
    process["nodes"][2] = json!({"id": "a", "label": "A", "clazz": "userTask",
        "assignType": "person", "assignValue": [31, 35], "isCounterSign": true});
    let fixture = Fixture::new(
        process,
        json!([
            state("a", "A", &[31, 35]),
            state("b", "B", &[32]),
            state("c", "C", &[33])
        ]),
        &[],
    );

    for (branch, user_id) in [("a", 31), ("b", 32), ("c", 33)] {
        fixture
            .service
            .handle_work_order(&caller(user_id), approve(branch, "join"))
            .expect("arrival");
        assert_eq!(fixture.active_ids(), vec!["a", "b", "c"]);
    }

    fixture
        .service
        .handle_work_order(&caller(35), approve("a", "join"))
        .expect("last signature");
    assert_eq!(fixture.active_ids(), vec!["done"]);

    let history = fixture.history();
    assert_eq!(history.len(), 4);
    assert!(!history[0].held);
    assert!(history[1..].iter().all(|x| x.held));
}

#[test]
fn countersign_commits_on_last_distinct_processor() {
    init_logger();
    let fixture = Fixture::new(
        countersign_process(),
        json!([state("sign", "Sign", &[21, 22, 23])]),
        &[],
    );

    for user_id in [21, 21, 22] {
        fixture
            .service
            .handle_work_order(&caller(user_id), approve("sign", "end"))
            .expect("sign");
        assert_eq!(fixture.active_ids(), vec!["sign"]);
    }
    assert!(!fixture.service.get_work_order(WORK_ORDER_ID).expect("work order").is_end);

    fixture
        .service
        .handle_work_order(&caller(23), approve("sign", "end"))
        .expect("last signature");

    let work_order = fixture.service.get_work_order(WORK_ORDER_ID).expect("work order");
    assert!(work_order.is_end);
    assert_eq!(work_order.active_states[0].id, "end");
    assert_eq!(work_order.related_person, vec![CREATOR, 23]);

    let history = fixture.history();
    assert_eq!(history.len(), 5);
    let terminal = history
        .iter()
        .find(|x| x.target.is_empty())
        .expect("terminal record");
    assert_eq!(terminal.source, "end");
    assert_eq!(terminal.circulation, "ended");
    assert_eq!(terminal.processor_id, 23);
}

#[test]
fn reject_bypasses_gateway_and_countersign() {
    init_logger();
    let fixture = Fixture::new(
        countersign_process(),
        json!([state("sign", "Sign", &[21, 22, 23])]),
        &[],
    );

    fixture
        .service
        .handle_work_order(
            &caller(21),
            HandleWorkOrderRequest::new(WORK_ORDER_ID, "sign", "start", FlowOutcome::Reject),
        )
        .expect("sent back");

    let work_order = fixture.service.get_work_order(WORK_ORDER_ID).expect("work order");
    assert_eq!(work_order.active_states.len(), 1);
    assert_eq!(work_order.active_states[0].id, "start");
    assert_eq!(work_order.active_states[0].processor, vec![CREATOR]);

    // the gateway itself becomes the active state on reject
    let fixture = Fixture::new(
        leave_process(),
        json!([state("review", "Review", &[11])]),
        &[],
    );
    fixture
        .service
        .handle_work_order(
            &caller(11),
            HandleWorkOrderRequest::new(WORK_ORDER_ID, "review", "route", FlowOutcome::Reject),
        )
        .expect("no condition evaluated");
    assert_eq!(fixture.active_ids(), vec!["route"]);
}

#[test]
fn committed_state_round_trips() {
    init_logger();
    let fixture = Fixture::new(
        leave_process(),
        json!([state("start", "Start", &[CREATOR])]),
        &[],
    );
    fixture
        .service
        .handle_work_order(&caller(CREATOR), approve("start", "review"))
        .expect("start -> review");

    let first = fixture.service.get_work_order(WORK_ORDER_ID).expect("work order");
    let second = fixture.service.get_work_order(WORK_ORDER_ID).expect("work order");
    assert_eq!(first.active_states, second.active_states);
    assert_eq!(
        (
            first.active_states[0].id.as_str(),
            first.active_states[0].label.as_str(),
            first.active_states[0].processor.as_slice(),
            first.active_states[0].process_method.as_str()
        ),
        ("review", "Review", &[11i64][..], "person")
    );
}

#[test]
fn variable_processors_are_resolved() {
    init_logger();
    let fixture = Fixture::new(
        leave_process(),
        json!([state("review", "Review", &[11])]),
        &[],
    );

    fixture
        .service
        .handle_work_order(&caller(11), approve("review", "lead"))
        .expect("review -> lead");

    let work_order = fixture.service.get_work_order(WORK_ORDER_ID).expect("work order");
    assert_eq!(work_order.active_states[0].processor, vec![CREATOR, 40]);
    assert_eq!(work_order.active_states[0].process_method, "person");
}

#[test]
fn end_node_closes_work_order() {
    init_logger();
    let fixture = Fixture::with_properties(
        leave_process(),
        json!([state("approved", "Approved", &[12])]),
        &[],
        Properties {
            locale: Locale::Zh,
            ..Properties::default()
        },
    );
    fixture
        .store
        .insert_circulation_history(history_entry("route", "approved", seconds_ago(3661)));

    fixture
        .service
        .handle_work_order(&caller(12), approve("approved", "end"))
        .expect("approved -> end");

    let work_order = fixture.service.get_work_order(WORK_ORDER_ID).expect("work order");
    assert!(work_order.is_end);

    let history = fixture.history();
    assert_eq!(history.len(), 3);
    let transition = history
        .iter()
        .find(|x| x.source == "approved")
        .expect("transition record");
    assert_eq!(transition.cost_duration, "01小时 01分钟");
    let terminal = history
        .iter()
        .find(|x| x.source == "end")
        .expect("terminal record");
    assert_eq!(terminal.circulation, "结束");
    assert!(terminal.target.is_empty());

    let err = fixture
        .service
        .handle_work_order(&caller(12), approve("end", "end"))
        .expect_err("ended work order");
    assert_eq!(err.code(), ErrorCode::ConflictCode());
}

#[test]
fn cost_duration_since_arrival() {
    init_logger();
    let fixture = Fixture::new(
        leave_process(),
        json!([state("review", "Review", &[11])]),
        &[],
    );
    fixture
        .store
        .insert_circulation_history(history_entry("start", "review", seconds_ago(90)));

    fixture
        .service
        .handle_work_order(&caller(11), approve("review", "approved"))
        .expect("review -> approved");

    let history = fixture.history();
    assert_eq!(history[0].source, "review");
    assert_eq!(history[0].cost_duration, "0 hours 2 minutes");
}

#[test]
fn malformed_requests() {
    init_logger();
    let fixture = Fixture::new(
        leave_process(),
        json!([state("review", "Review", &[11])]),
        &[],
    );

    let err = fixture
        .service
        .handle_work_order(&caller(11), approve("start", "review"))
        .expect_err("start is not active");
    assert_eq!(err.code(), ErrorCode::ConflictCode());

    let err = fixture
        .service
        .handle_work_order(&caller(11), approve("review", "nowhere"))
        .expect_err("unknown target");
    assert_eq!(err.code(), ErrorCode::NotFoundCode());

    let err = fixture
        .service
        .handle_work_order(
            &caller(11),
            HandleWorkOrderRequest::new(2, "review", "route", FlowOutcome::Approve),
        )
        .expect_err("unknown work order");
    assert_eq!(err.code(), ErrorCode::NotFoundCode());

    assert_eq!(fixture.active_ids(), vec!["review"]);
    assert!(fixture.history().is_empty());
}

#[test]
fn inclusive_gateway_is_unsupported() {
    init_logger();
    let fixture = Fixture::new(leave_process(), json!([state("lead", "Lead", &[CREATOR])]), &[]);

    let err = fixture
        .service
        .handle_work_order(&caller(CREATOR), approve("lead", "any"))
        .expect_err("inclusive gateway");
    assert_eq!(err.code(), ErrorCode::UnimplementedGatewayCode());
    assert_eq!(fixture.active_ids(), vec!["lead"]);
}

#[test]
fn task_dispatch_can_be_disabled() {
    init_logger();
    let fixture = Fixture::with_properties(
        leave_process(),
        json!([state("start", "Start", &[CREATOR])]),
        &[],
        Properties {
            task_dispatch_enabled: false,
            ..Properties::default()
        },
    );

    fixture
        .service
        .handle_work_order(&caller(CREATOR), approve("start", "review"))
        .expect("start -> review");
    assert!(fixture.queue.events().is_empty());
}
