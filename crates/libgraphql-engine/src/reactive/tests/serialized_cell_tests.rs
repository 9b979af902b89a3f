use crate::reactive::SerializedCell;
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::Mutex;

#[test]
fn updates_from_many_threads_are_all_applied() {
    let cell = SerializedCell::new(0usize);
    (0..1_000).into_par_iter().for_each(|_| {
        cell.submit(|count| *count += 1);
    });

    let observed = Arc::new(Mutex::new(None));
    let observed_clone = Arc::clone(&observed);
    cell.submit(move |count| {
        *observed_clone.lock().unwrap() = Some(*count);
    });
    assert_eq!(*observed.lock().unwrap(), Some(1_000));
}
