use std::thread;
use todoz::error::ErrorKind;
use todoz::shared::SharedTodozApi;

#[test]
fn only_one_of_many_racing_registrations_wins() {
    let api = SharedTodozApi::in_memory();
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let api = api.clone();
            thread::spawn(move || api.register_user("race@example.com", &format!("password-{i}")))
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = outcomes.iter().filter(|o| o.is_success()).count();
    let conflicts = outcomes
        .iter()
        .filter(|o| o.kind() == Some(ErrorKind::Conflict))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(conflicts, 15);
}

#[test]
fn concurrent_adds_are_all_recorded() {
    let api = SharedTodozApi::in_memory();
    let user = api
        .register_user("alice@example.com", "password123")
        .user_id()
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let api = api.clone();
            thread::spawn(move || {
                for n in 0..25 {
                    let outcome = api.add_todo(&user, &format!("w{worker}-{n}"), None);
                    assert!(outcome.is_success());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let all = api.get_all_todos(&user);
    assert_eq!(all.todos().len(), 200);

    let mut ids: Vec<_> = all.todos().iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 200);
}

#[test]
fn concurrent_deletes_remove_each_todo_once() {
    let api = SharedTodozApi::in_memory();
    let user = api
        .register_user("alice@example.com", "password123")
        .user_id()
        .unwrap();
    let todo = api.add_todo(&user, "Contended", None).todo().unwrap().id;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let api = api.clone();
            thread::spawn(move || api.delete_todo(&user, &todo).is_success())
        })
        .collect();
    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert!(api.get_all_todos(&user).todos().is_empty());
}
