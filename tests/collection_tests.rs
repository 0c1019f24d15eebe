use bussort::RecordError;
use bussort::prelude::*;

#[test]
fn test_record_equality_and_display() {
    let a = Record::new("A100", "Ikarus 280", 120_000);
    let b = Record::new("A100", "Ikarus 280", 120_000);
    assert_eq!(a, b);
    assert_ne!(a, Record::new("A100", "Ikarus 280", 120_001));
    assert_eq!(a.to_string(), "Bus No.A100, Model: Ikarus 280, Mileage: 120000 km");
}

#[test]
fn test_record_validation() {
    assert!(Record::try_new("A100", "Ikarus 280", 0).is_ok());
    assert!(Record::try_new("ABCDEFGHIJ", "M".repeat(50), 1_000_000).is_ok());

    assert_eq!(
        Record::try_new(" ", "PAZ", 1),
        Err(RecordError::BlankIdentifier)
    );
    assert_eq!(
        Record::try_new("ABCDEFGHIJK", "PAZ", 1),
        Err(RecordError::IdentifierTooLong { len: 11 })
    );
    assert_eq!(Record::try_new("A", "", 1), Err(RecordError::BlankModel));
    assert_eq!(
        Record::try_new("A", "M".repeat(51), 1),
        Err(RecordError::ModelTooLong { len: 51 })
    );
    assert_eq!(
        Record::try_new("A", "PAZ", -1),
        Err(RecordError::MileageOutOfRange(-1))
    );
    assert_eq!(
        Record::try_new("A", "PAZ", 1_000_001),
        Err(RecordError::MileageOutOfRange(1_000_001))
    );
}

#[test]
fn test_collection_growth() {
    let mut collection = RecordCollection::new();
    assert!(collection.is_empty());
    assert!(collection.capacity() >= 10);

    let mut capacity = collection.capacity();
    for i in 0..100 {
        collection.push(Record::new(format!("B{}", i), "PAZ", i));
        assert!(collection.len() <= collection.capacity());
        if collection.capacity() != capacity {
            assert!(collection.capacity() >= capacity * 2);
            capacity = collection.capacity();
        }
    }

    assert_eq!(collection.len(), 100);
    for i in 0..100 {
        assert_eq!(collection.get(i as usize).map(Record::mileage), Some(i));
    }
    assert!(collection.get(100).is_none());
}

#[test]
fn test_snapshot_is_independent() {
    let mut collection: RecordCollection = (0..5)
        .map(|i| Record::new(format!("B{}", i), "PAZ", i))
        .collect();

    let mut snapshot = collection.snapshot();
    assert_eq!(snapshot.len(), collection.len());

    snapshot.reverse();
    snapshot[0] = None;
    assert_eq!(collection.get(0).map(Record::identifier), Some("B0"));
    assert_eq!(collection.len(), 5);

    collection.replace_contents(snapshot);
    let ids: Vec<&str> = collection.iter().map(Record::identifier).collect();
    assert_eq!(ids, vec!["B3", "B2", "B1", "B0"]);
}

#[test]
fn test_replace_with_and_extend() {
    let mut collection = RecordCollection::default();
    collection.extend([Record::new("A", "PAZ", 1), Record::new("B", "PAZ", 2)]);

    let other: RecordCollection = [Record::new("Z", "MAZ", 9)].into_iter().collect();
    collection.replace_with(other);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.as_slice(), &[Record::new("Z", "MAZ", 9)]);

    let owned: Vec<Record> = collection.into_iter().collect();
    assert_eq!(owned.len(), 1);
}

#[test]
fn test_collection_sort_round_trip() {
    let mut collection: RecordCollection = [
        Record::new("A", "PAZ", 40_000),
        Record::new("B", "PAZ", 30_001),
        Record::new("C", "PAZ", 20_000),
    ]
    .into_iter()
    .collect();

    let mut runner = SortRunner::new(Comparator::new(&[SortField::Mileage]).unwrap());
    runner.set_strategy(PartialHybridSort);
    runner.sort_collection(&mut collection).unwrap();

    let ids: Vec<&str> = (&collection).into_iter().map(Record::identifier).collect();
    assert_eq!(ids, vec!["C", "B", "A"]);
}
