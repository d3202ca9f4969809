use todoz::api::TodozApi;
use todoz::error::{Result, TodozError};
use todoz::model::{TodoPatch, TodoStatus};
use todoz::outcome::Outcome;
use todoz::store::DataStore;
use uuid::Uuid;

use super::print::{print_envelope, print_heading, print_todos};

/// Walk through registration, login and the todo lifecycle, printing the
/// envelope of every call.
pub(crate) fn run<S: DataStore>(api: &mut TodozApi<S>, pretty: bool) -> Result<()> {
    let show = |outcome: &Outcome| print_envelope(outcome, pretty);

    print_heading("--- 1. User Registration ---");
    let alice = api.register_user("alice@example.com", "password123");
    show(&alice);
    show(&api.register_user("bob@example.com", "bob-secret"));

    print_heading("--- 2. Registering with a duplicate email (expect error) ---");
    show(&api.register_user("alice@example.com", "anotherpass"));

    let alice_id = alice
        .user_id()
        .ok_or_else(|| TodozError::Store("registration returned no user id".into()))?;

    print_heading("--- 3. User Login ---");
    show(&api.login_user("alice@example.com", "password123"));

    print_heading("--- 4. Login with wrong password (expect error) ---");
    show(&api.login_user("alice@example.com", "wrongpass"));

    print_heading("--- 5. Adding TODOs for Alice ---");
    let groceries = api.add_todo(&alice_id, "Buy Groceries", Some("Milk, Bread, Eggs"));
    show(&groceries);
    let report = api.add_todo(
        &alice_id,
        "Finish Project Report",
        Some("Complete the final section and proofread."),
    );
    show(&report);
    show(&api.add_todo(
        &alice_id,
        "Schedule Dentist Appointment",
        Some("Call Dr. Smith's office."),
    ));

    let groceries_id = todo_id(&groceries)?;
    let report_id = todo_id(&report)?;

    print_heading("--- 6. Get All of Alice's TODOs ---");
    show(&api.get_all_todos(&alice_id));

    print_heading("--- 7. Update a TODO (Buy Groceries -> Buy Organic Groceries) ---");
    let rename = TodoPatch::new().title("Buy Organic Groceries");
    show(&api.update_todo(&alice_id, &groceries_id, &rename));

    print_heading("--- 8. Mark a TODO as Completed (Project Report) ---");
    let complete = TodoPatch::new().status(TodoStatus::Completed);
    show(&api.update_todo(&alice_id, &report_id, &complete));

    print_heading("--- 9. Get Only Active TODOs ---");
    show(&api.get_active_todos(&alice_id));

    print_heading("--- 10. Get Only Completed TODOs ---");
    show(&api.get_completed_todos(&alice_id));

    print_heading("--- 11. Search for TODOs containing 'dentist' ---");
    show(&api.search_todos(&alice_id, "dentist"));

    print_heading("--- 12. Delete a TODO ---");
    show(&api.delete_todo(&alice_id, &groceries_id));

    print_heading("--- 13. Get All TODOs again to see the deletion ---");
    let remaining = api.get_all_todos(&alice_id);
    show(&remaining);

    print_heading("Alice's list");
    print_todos(remaining.todos());
    Ok(())
}

fn todo_id(outcome: &Outcome) -> Result<Uuid> {
    outcome
        .todo()
        .map(|t| t.id)
        .ok_or_else(|| TodozError::Store("add_todo returned no todo".into()))
}
