use classic_ds::priority::PriorityQueue;
use classic_ds::Error;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn never_increasing_priority(priorities: Vec<i32>) -> bool {
    let mut queue = PriorityQueue::new();
    for (i, priority) in priorities.iter().enumerate() {
        queue.enqueue(i.to_string(), *priority);
    }

    let mut previous: Option<(i32, usize)> = None;
    while let Ok(value) = queue.dequeue() {
        let index: usize = value.parse().unwrap();
        let current = (priorities[index], index);
        if let Some((prev_priority, prev_index)) = previous {
            // Lower priority, or the same priority but later arrival.
            let in_order = current.0 < prev_priority
                || (current.0 == prev_priority && current.1 > prev_index);
            if !in_order {
                return false;
            }
        }
        previous = Some(current);
    }

    queue.is_empty()
}

#[quickcheck]
fn failed_dequeue_changes_nothing(values: Vec<(String, i8)>) -> bool {
    let mut queue = PriorityQueue::new();
    for (value, priority) in &values {
        queue.enqueue(value.clone(), i32::from(*priority));
    }
    for _ in 0..values.len() {
        queue.dequeue().unwrap();
    }
    if queue.dequeue() != Err(Error::EmptyCollection) {
        return false;
    }

    // Works exactly the same as a fresh queue afterwards.
    let mut fresh = PriorityQueue::new();
    for (value, priority) in &values {
        queue.enqueue(value.clone(), i32::from(*priority));
        fresh.enqueue(value.clone(), i32::from(*priority));
    }
    queue == fresh && queue.to_string() == fresh.to_string()
}

#[quickcheck]
fn display_lists_entries_in_insertion_order(values: Vec<(u16, i32)>) -> bool {
    let queue: PriorityQueue = values.iter().map(|(v, p)| (v.to_string(), *p)).collect();

    let entries: Vec<_> = values
        .iter()
        .map(|(v, p)| format!("{} (Pri:{})", v, p))
        .collect();
    queue.to_string() == format!("[{}]", entries.join(", "))
}
