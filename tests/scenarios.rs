// End-to-end scenarios across the three collections.
//
// Each test names the behavior it pins down:
// - LinkedList: predicate removal relinks and out-of-range access is an error.
// - Queue: rotate gives round-robin order and N rotations restore the queue.
// - HashMap: the resize boundary at capacity 4 / threshold 0.75, and the
//   station-registry usage of a map whose values are per-key histories.
use chained_hashmap::{Error, HashMap, HashMapConfig, LinkedList, Queue};

// Test: remove by predicate in the middle of [10, 20, 30].
// Verifies: survivors keep order, len drops, get(5) is IndexOutOfRange.
#[test]
fn linked_list_remove_middle_then_index_past_end() {
    let mut l: LinkedList<i32> = [10, 20, 30].into_iter().collect();
    assert!(l.remove(|&v| v == 20));
    assert_eq!(l.to_vec(), vec![10, 30]);
    assert_eq!(l.len(), 2);
    assert_eq!(l.get(5), Err(Error::IndexOutOfRange { index: 5, len: 2 }));
}

// Test: station carousel over ["01", "04", "08"].
// Verifies: one rotate exposes "04"; three rotates restore the order.
#[test]
fn queue_rotation_is_round_robin() {
    let mut q: Queue<String> = ["01", "04", "08"].iter().map(|s| s.to_string()).collect();
    q.rotate();
    assert_eq!(q.peek().map(String::as_str), Ok("04"));
    q.rotate();
    q.rotate();
    assert_eq!(q.to_vec(), vec!["01", "04", "08"]);
}

// Test: N rotations of an N-element queue is the identity, for several N.
#[test]
fn queue_full_cycle_restores_order() {
    for n in 0..10 {
        let mut q: Queue<usize> = (0..n).collect();
        for _ in 0..n {
            q.rotate();
        }
        assert_eq!(q.to_vec(), (0..n).collect::<Vec<_>>());
        assert_eq!(q.len(), n);
    }
}

// Test: capacity 4, threshold 0.75, keys a..d.
// Assumes: check-before-insert on (len + 1) / capacity.
// Verifies: no growth at 3/4; the fourth key grows to 8 first; all values kept.
#[test]
fn hash_map_resize_boundary() {
    let config = HashMapConfig::default()
        .with_initial_capacity(4)
        .with_load_factor_threshold(0.75);
    let mut m: HashMap<&str, i32> = HashMap::with_config(config).unwrap();
    m.put("a", 1);
    m.put("b", 2);
    m.put("c", 3);
    assert_eq!(m.capacity(), 4);
    assert_eq!(m.load_factor(), 0.75);
    m.put("d", 4);
    assert_eq!(m.get("a"), Some(&1));
    assert_eq!(m.get("b"), Some(&2));
    assert_eq!(m.get("c"), Some(&3));
    assert_eq!(m.get("d"), Some(&4));
    assert!(m.capacity() >= 8);
    assert_eq!(m.capacity(), 8);
}

// Test: remove twice.
// Verifies: true then false, len unchanged by the miss.
#[test]
fn hash_map_double_remove() {
    let mut m: HashMap<String, u8> = HashMap::new();
    m.put("k".to_string(), 1);
    m.put("j".to_string(), 2);
    assert!(m.remove("k"));
    assert_eq!(m.len(), 1);
    assert!(!m.remove("k"));
    assert_eq!(m.len(), 1);
}

// Test: zero buckets cannot be requested.
#[test]
fn hash_map_zero_capacity_fails_fast() {
    let r = HashMap::<String, u8>::with_capacity(0);
    assert!(matches!(r, Err(Error::InvalidConfiguration { .. })));
}

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    hour: u8,
    temperature_c: f32,
}

// Test: the registry shape consumers build: station id -> history list, and
// a queue of ids driving a carousel.
// Verifies: histories survive many resizes; latest reading is the list head
// after prepend; the carousel visits every station in turn.
#[test]
fn station_registry_with_histories_and_carousel() {
    let mut histories: HashMap<String, LinkedList<Reading>> = HashMap::with_capacity(2).unwrap();
    let ids: Vec<String> = (0..40).map(|i| format!("{i:02}")).collect();

    for hour in 0..3u8 {
        for id in &ids {
            histories
                .get_or_insert_with(id.clone(), LinkedList::new)
                .prepend(Reading {
                    hour,
                    temperature_c: f32::from(hour) + 10.0,
                });
        }
    }

    assert_eq!(histories.len(), ids.len());
    assert!(histories.load_factor() <= 0.75);
    for id in &ids {
        let h = &histories[id.as_str()];
        assert_eq!(h.len(), 3);
        assert_eq!(h.head().map(|r| r.hour), Some(2));
        assert_eq!(h.head().map(|r| r.temperature_c), Some(12.0));
        let hours: Vec<u8> = h.iter().map(|r| r.hour).collect();
        assert_eq!(hours, vec![2, 1, 0]);
    }

    let mut carousel: Queue<String> = ids.iter().take(3).cloned().collect();
    let shown: Vec<String> = carousel.carousel().take(7).collect();
    assert_eq!(shown, vec!["00", "01", "02", "00", "01", "02", "00"]);
    for id in &shown {
        assert!(histories.contains(id.as_str()));
    }
}
