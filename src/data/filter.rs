use super::model::{TripDataset, UserType};

// ---------------------------------------------------------------------------
// Filter predicate: which rider category is selected
// ---------------------------------------------------------------------------

/// The dropdown selection: show every trip, or only one rider category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserTypeFilter {
    #[default]
    All,
    Only(UserType),
}

impl UserTypeFilter {
    /// The fixed option set offered by the dropdown, in display order.
    pub const OPTIONS: [UserTypeFilter; 3] = [
        UserTypeFilter::All,
        UserTypeFilter::Only(UserType::Subscriber),
        UserTypeFilter::Only(UserType::Customer),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UserTypeFilter::All => "All",
            UserTypeFilter::Only(user_type) => user_type.as_str(),
        }
    }

    pub fn matches(&self, user_type: UserType) -> bool {
        match self {
            UserTypeFilter::All => true,
            UserTypeFilter::Only(selected) => *selected == user_type,
        }
    }
}

/// Return indices of trips that pass the filter, preserving the original
/// row order (stable filter).
pub fn filtered_indices(dataset: &TripDataset, filter: UserTypeFilter) -> Vec<usize> {
    dataset
        .trips
        .iter()
        .enumerate()
        .filter(|(_, trip)| filter.matches(trip.user_type))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_both_categories() {
        assert!(UserTypeFilter::All.matches(UserType::Subscriber));
        assert!(UserTypeFilter::All.matches(UserType::Customer));
    }

    #[test]
    fn only_matches_its_own_category() {
        let filter = UserTypeFilter::Only(UserType::Customer);
        assert!(filter.matches(UserType::Customer));
        assert!(!filter.matches(UserType::Subscriber));
    }

    #[test]
    fn default_is_all() {
        assert_eq!(UserTypeFilter::default(), UserTypeFilter::All);
    }
}
