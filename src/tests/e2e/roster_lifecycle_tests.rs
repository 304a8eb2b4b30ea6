use crate::modules::roster::core::employee::Gender;
use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::core::filter::{GenderFilter, RosterFilter, StatusFilter};
use crate::modules::roster::store::{EMPLOYEES_KEY, RosterStore};
use crate::modules::roster::use_cases::submit_employee_form::command::SubmitEmployeeForm;
use crate::modules::roster::use_cases::submit_employee_form::handler::{
    ApplicationError, SubmitEmployeeFormHandler,
};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::change_notifier::ChangeNotifier;
use crate::shared::infrastructure::change_notifier::broadcast_notifier::BroadcastNotifier;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::tests::fixtures::clock::FixedClock;
use crate::tests::fixtures::forms::employee_form::EmployeeFormBuilder;
use chrono::Months;
use std::sync::Arc;

type TestRoster = RosterStore<InMemoryKeyValueStore, BroadcastNotifier<RosterEvent>>;

async fn open_empty(
    kv: Arc<InMemoryKeyValueStore>,
    notifier: Arc<BroadcastNotifier<RosterEvent>>,
    clock: Arc<dyn Clock>,
) -> TestRoster {
    if kv.get(EMPLOYEES_KEY).await.unwrap().is_none() {
        kv.set(EMPLOYEES_KEY, "[]").await.unwrap();
    }
    RosterStore::load(kv, notifier, clock).await.unwrap()
}

#[tokio::test]
async fn first_employee_on_an_empty_roster_is_emp001() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let roster = open_empty(
        kv,
        Arc::new(BroadcastNotifier::new()),
        Arc::new(FixedClock::default()),
    )
    .await;

    let employee = roster.add(EmployeeFormBuilder::new().build()).await.unwrap();

    assert_eq!(employee.id.as_str(), "EMP001");
    assert_eq!(employee.full_name, "Asha Rao");
    assert_eq!(employee.state, "Karnataka");
    assert_eq!(employee.created_at, employee.updated_at);
}

#[tokio::test]
async fn deleted_identifiers_are_not_handed_out_again() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let roster = open_empty(
        kv,
        Arc::new(BroadcastNotifier::new()),
        Arc::new(FixedClock::default()),
    )
    .await;

    roster.add(EmployeeFormBuilder::new().build()).await.unwrap();
    let second = roster
        .add(EmployeeFormBuilder::new().full_name("Rohan Iyer").build())
        .await
        .unwrap();
    roster.delete("EMP001").await.unwrap();
    let third = roster
        .add(EmployeeFormBuilder::new().full_name("Meera Nair").build())
        .await
        .unwrap();

    assert_eq!(second.id.as_str(), "EMP002");
    assert_eq!(third.id.as_str(), "EMP003");
    let ids: Vec<String> = roster
        .employees()
        .await
        .iter()
        .map(|e| e.id.to_string())
        .collect();
    assert_eq!(ids, vec!["EMP002", "EMP003"]);
}

#[tokio::test]
async fn underage_form_is_rejected_before_the_roster_is_touched() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let notifier = Arc::new(BroadcastNotifier::<RosterEvent>::new());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::default());
    let roster = Arc::new(open_empty(kv.clone(), notifier.clone(), clock.clone()).await);
    let handler = SubmitEmployeeFormHandler::new(roster.clone(), clock.clone());
    let mut events = notifier.subscribe();

    let ten_years_ago = clock.today().checked_sub_months(Months::new(120)).unwrap();
    let result = handler
        .handle(SubmitEmployeeForm::create(
            EmployeeFormBuilder::new().date_of_birth(ten_years_ago).build(),
        ))
        .await;

    assert!(matches!(result, Err(ApplicationError::Rejected(_))));
    assert_eq!(roster.total().await, 0);
    assert_eq!(kv.get(EMPLOYEES_KEY).await.unwrap().as_deref(), Some("[]"));
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn counts_follow_every_mutation() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let roster = open_empty(
        kv,
        Arc::new(BroadcastNotifier::new()),
        Arc::new(FixedClock::default()),
    )
    .await;

    for (name, active) in [("Asha Rao", true), ("Rohan Iyer", false), ("Meera Nair", true)] {
        roster
            .add(EmployeeFormBuilder::new().full_name(name).is_active(active).build())
            .await
            .unwrap();
    }
    assert_eq!(
        (roster.total().await, roster.active_count().await, roster.inactive_count().await),
        (3, 2, 1)
    );

    roster.toggle_status("EMP002").await.unwrap();
    assert_eq!((roster.active_count().await, roster.inactive_count().await), (3, 0));

    roster.delete("EMP001").await.unwrap();
    let stats = roster.stats().await;
    assert_eq!((stats.total, stats.active, stats.inactive), (2, 2, 0));
    assert_eq!(stats.active + stats.inactive, stats.total);
}

#[tokio::test]
async fn a_reopened_roster_reads_back_the_same_collection() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let clock = Arc::new(FixedClock::default());
    let first = open_empty(kv.clone(), Arc::new(BroadcastNotifier::new()), clock.clone()).await;

    first.add(EmployeeFormBuilder::new().build()).await.unwrap();
    clock.advance_secs(60);
    first
        .add(EmployeeFormBuilder::new().full_name("Rohan Iyer").is_active(false).build())
        .await
        .unwrap();
    clock.advance_secs(60);
    first
        .update(
            "EMP001",
            EmployeeFormBuilder::new().full_name("Asha R. Rao").state("Kerala").build(),
        )
        .await
        .unwrap();

    let second = open_empty(kv, Arc::new(BroadcastNotifier::new()), clock).await;

    assert_eq!(second.employees().await, first.employees().await);
    let asha = second.get("EMP001").await.unwrap();
    assert_eq!(asha.full_name, "Asha R. Rao");
    assert_eq!(asha.state, "Kerala");
    assert!(asha.updated_at > asha.created_at);
}

#[tokio::test]
async fn filtered_view_tracks_the_live_collection() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let roster = open_empty(
        kv,
        Arc::new(BroadcastNotifier::new()),
        Arc::new(FixedClock::default()),
    )
    .await;
    roster.add(EmployeeFormBuilder::new().build()).await.unwrap();
    roster
        .add(
            EmployeeFormBuilder::new()
                .full_name("Rohan Iyer")
                .gender(Gender::Male)
                .build(),
        )
        .await
        .unwrap();

    let women_named_rao = RosterFilter::default()
        .search("RAO")
        .gender(GenderFilter::Female)
        .status(StatusFilter::Active);
    assert_eq!(roster.filtered(&women_named_rao).await.len(), 1);

    roster.toggle_status("EMP001").await.unwrap();
    assert!(roster.filtered(&women_named_rao).await.is_empty());
    assert_eq!(roster.total().await, 2);
}

#[tokio::test]
async fn subscribers_hear_about_each_committed_change_in_order() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let notifier = Arc::new(BroadcastNotifier::<RosterEvent>::new());
    let roster = open_empty(kv, notifier.clone(), Arc::new(FixedClock::default())).await;
    let mut events = notifier.subscribe();

    roster.add(EmployeeFormBuilder::new().build()).await.unwrap();
    roster.toggle_status("EMP001").await.unwrap();
    roster.delete("EMP001").await.unwrap();

    assert_eq!(
        events.recv().await.unwrap(),
        RosterEvent::Added { id: "EMP001".into() }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        RosterEvent::StatusToggled {
            id: "EMP001".into(),
            is_active: false
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        RosterEvent::Deleted { id: "EMP001".into() }
    );
}
