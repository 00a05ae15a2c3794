use std::fs;
use std::path::PathBuf;

use trip_deck::data::filter::{filtered_indices, UserTypeFilter};
use trip_deck::data::loader::load_file;
use trip_deck::data::model::UserType;

fn fixture_path() -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/data/trips.csv",
        env!("CARGO_MANIFEST_DIR")
    ))
}

#[test]
fn all_keeps_every_row_in_order() {
    let dataset = load_file(&fixture_path()).unwrap();
    let indices = filtered_indices(&dataset, UserTypeFilter::All);
    assert_eq!(indices, (0..dataset.len()).collect::<Vec<_>>());
}

#[test]
fn subscriber_selection_is_a_stable_subset() {
    let dataset = load_file(&fixture_path()).unwrap();
    let indices = filtered_indices(&dataset, UserTypeFilter::Only(UserType::Subscriber));

    assert_eq!(indices.len(), dataset.count_of(UserType::Subscriber));
    for &index in &indices {
        assert_eq!(dataset.trips[index].user_type, UserType::Subscriber);
    }
    // Original relative order is preserved.
    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn customer_selection_is_a_stable_subset() {
    let dataset = load_file(&fixture_path()).unwrap();
    let indices = filtered_indices(&dataset, UserTypeFilter::Only(UserType::Customer));

    assert_eq!(indices.len(), dataset.count_of(UserType::Customer));
    for &index in &indices {
        assert_eq!(dataset.trips[index].user_type, UserType::Customer);
    }
    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn selections_partition_the_dataset() {
    let dataset = load_file(&fixture_path()).unwrap();
    let subscribers = filtered_indices(&dataset, UserTypeFilter::Only(UserType::Subscriber));
    let customers = filtered_indices(&dataset, UserTypeFilter::Only(UserType::Customer));
    assert_eq!(subscribers.len() + customers.len(), dataset.len());
}

// The worked example from the dashboard's contract: two raw rows, one per
// rider category, with 120 s and 90 s durations.
#[test]
fn two_row_example() {
    let contents = "\
tripduration,starttime,stoptime,start.station.id,start.station.name,\
start.station.latitude,start.station.longitude,end.station.id,end.station.name,\
end.station.latitude,end.station.longitude,bikeid,usertype,birth.year,gender
120,2019-07-01 10:00:00,2019-07-01 10:02:00,72,A,40.0,-74.0,79,B,40.1,-74.1,100,Subscriber,1984,1
90,2019-07-01 11:00:00,2019-07-01 11:01:30,79,B,40.1,-74.1,72,A,40.0,-74.0,101,Customer,1990,2
";
    let path = std::env::temp_dir().join(format!(
        "trip-deck-{}-two-row-example.csv",
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    let dataset = load_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    let subscribers = filtered_indices(&dataset, UserTypeFilter::Only(UserType::Subscriber));
    assert_eq!(subscribers, [0]);
    assert_eq!(dataset.trips[subscribers[0]].dur, 2.0);

    let customers = filtered_indices(&dataset, UserTypeFilter::Only(UserType::Customer));
    assert_eq!(customers, [1]);
    assert_eq!(dataset.trips[customers[0]].dur, 1.5);

    let all = filtered_indices(&dataset, UserTypeFilter::All);
    assert_eq!(all, [0, 1]);
}
