use chainkv::{hash_index, HashTable, TableError};

fn key(s: &str) -> String {
    s.to_owned()
}

#[test]
fn get_stored_value() {
    let mut table = HashTable::new(5);
    table.update_value(key("value1"), key("key1"));
    table.update_value(key("value2"), key("key2"));

    assert_eq!(table.value(&key("key1")), Some(&key("value1")));
    assert_eq!(table.value(&key("key2")), Some(&key("value2")));
}

#[test]
fn overwrite_returns_previous_value() {
    let mut table = HashTable::new(5);
    assert_eq!(table.update_value(key("value1"), key("key1")), None);
    assert_eq!(
        table.update_value(key("value2"), key("key1")),
        Some(key("value1"))
    );
    assert_eq!(table.value(&key("key1")), Some(&key("value2")));
    assert_eq!(table.len(), 1);
}

#[test]
fn get_non_existent_value() {
    let mut table = HashTable::new(5);
    table.update_value(key("value1"), key("key1"));
    assert_eq!(table.value(&key("key2")), None);
    assert!(!table.contains_key(&key("key2")));
}

#[test]
fn remove_key() {
    let mut table = HashTable::new(5);
    table.update_value(key("value1"), key("key1"));
    assert_eq!(table.remove_value(&key("key1")), Some(key("value1")));
    assert_eq!(table.value(&key("key1")), None);
    assert!(table.is_empty());
}

#[test]
fn remove_absent_key_is_a_no_op() {
    let mut table = HashTable::new(5);
    table.update_value(1, key("kept"));
    assert_eq!(table.remove_value(&key("gone")), None);
    assert_eq!(table.remove_value(&key("gone")), None);
    assert_eq!(table.len(), 1);
    assert_eq!(table.value(&key("kept")), Some(&1));

    table.remove_value(&key("kept"));
    assert_eq!(table.remove_value(&key("kept")), None);
    assert!(table.is_empty());
}

#[test]
fn colliding_keys_stay_apart() {
    let mut table = HashTable::new(1);
    table.update_value(1, key("a"));
    table.update_value(2, key("b"));
    assert_eq!(table.value(&key("a")), Some(&1));
    assert_eq!(table.value(&key("b")), Some(&2));

    table.remove_value(&key("a"));
    assert_eq!(table.value(&key("a")), None);
    assert_eq!(table.value(&key("b")), Some(&2));
}

#[test]
fn natural_collision() {
    // "a" and "b" share bucket 3 of 7
    let mut table = HashTable::new(7);
    assert_eq!(table.bucket_index(&key("a")), table.bucket_index(&key("b")));
    table.update_value(1, key("a"));
    table.update_value(2, key("b"));
    table.update_value(3, key("a"));
    assert_eq!(table.value(&key("a")), Some(&3));
    assert_eq!(table.value(&key("b")), Some(&2));
}

#[test]
fn first_name_scenario() {
    let mut table = HashTable::new(5);
    table.set(key("firstName"), Some(key("Steve")));
    assert_eq!(table.get(&key("firstName")), Some(&key("Steve")));
    assert_eq!(table[&key("firstName")], "Steve");
    assert_eq!(table.get(&key("lastName")), None);

    table.set(key("firstName"), None);
    assert_eq!(table.get(&key("firstName")), None);
}

#[test]
fn present_but_empty_is_not_absent() {
    let mut table: HashTable<String, Option<i32>> = HashTable::new(4);
    table.update_value(None, key("empty"));
    assert_eq!(table.value(&key("empty")), Some(&None));
    assert_eq!(table.value(&key("missing")), None);
    assert_eq!(table.remove_value(&key("empty")), Some(None));
}

#[test]
fn integer_keys() {
    let mut table = HashTable::new(3);
    for i in 0..100_i64 {
        table.update_value(i * i, i);
    }
    assert_eq!(table.len(), 100);
    for i in 0..100_i64 {
        assert_eq!(table.value(&i), Some(&(i * i)));
    }
    assert_eq!(table.model_description(&7), Some("7".to_owned()));
    assert_eq!(table.iter().count(), 100);
}

#[test]
fn index_is_always_in_range() {
    let keys = ["", "a", "firstName", "日本語", "🦀🦀", "with spaces"];
    for capacity in [1, 2, 5, 16, 97] {
        let table: HashTable<String, ()> = HashTable::new(capacity);
        for k in keys.iter() {
            let index = table.bucket_index(&key(k));
            assert!(index < capacity);
            assert_eq!(index, hash_index(k, capacity));
        }
        assert_eq!(table.bucket_index(&key("")), 0);
    }
}

#[test]
fn layout_lists_every_bucket() {
    let mut table = HashTable::new(7);
    table.update_value(1, key("a"));
    table.update_value(2, key("b"));
    let layout = table.layout();
    assert_eq!(layout.len(), 7);
    assert_eq!(layout[3].keys, vec!["a", "b"]);
    assert_eq!(layout.iter().map(|b| b.keys.len()).sum::<usize>(), 2);
}

#[test]
#[should_panic(expected = "capacity must be positive")]
fn zero_capacity_panics() {
    let _table: HashTable<String, String> = HashTable::new(0);
}

#[test]
fn zero_capacity_is_an_error() {
    let res: Result<HashTable<String, String>, TableError> = HashTable::try_new(0);
    assert!(matches!(res, Err(TableError::ZeroCapacity)));
    assert!(HashTable::<String, String>::try_new(1).is_ok());
}
