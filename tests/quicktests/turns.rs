use classic_ds::turns::{TurnEntry, TurnQueue};
use classic_ds::Error;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn served_in_arrival_order(turns: Vec<u8>) -> bool {
    let mut queue = TurnQueue::new();
    for (i, t) in turns.iter().enumerate() {
        queue.register(i.to_string(), i32::from(*t % 4) + 1);
    }

    // Replay the rotation by hand.
    let mut model: std::collections::VecDeque<_> = turns
        .iter()
        .enumerate()
        .map(|(i, t)| TurnEntry::new(i.to_string(), i32::from(*t % 4) + 1))
        .collect();

    while let Some(expected) = model.pop_front() {
        if queue.next() != Ok(expected.clone()) {
            return false;
        }
        if expected.remaining_turns() > 1 {
            model.push_back(TurnEntry::new(
                expected.name(),
                expected.remaining_turns() - 1,
            ));
        }
        if queue.len() != model.len() {
            return false;
        }
    }

    queue.next() == Err(Error::EmptyCollection)
}

#[quickcheck]
fn final_turn_shrinks_the_queue(budget: u8) -> bool {
    let budget = i32::from(budget) + 1;
    let mut queue = TurnQueue::new();
    queue.register("limited", budget);
    queue.register("forever", 0);

    let mut limited_turns = 0;
    for _ in 0..(budget * 2 + 10) {
        let before = queue.len();
        let entry = queue.next().unwrap();
        if entry.name() == "limited" {
            limited_turns += 1;
            let last = entry.remaining_turns() == 1;
            if last != (queue.len() == before - 1) {
                return false;
            }
        } else if entry.remaining_turns() != 0 {
            return false;
        }
    }

    limited_turns == budget && queue.len() == 1
}
