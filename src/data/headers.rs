// ---------------------------------------------------------------------------
// Header resolution: synonym table → column indices
// ---------------------------------------------------------------------------

/// The three semantic roles a price-list column can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Name,
    Price,
    Weight,
}

impl Role {
    /// Human-readable role label for messages.
    pub fn label(self) -> &'static str {
        match self {
            Role::Name => "name",
            Role::Price => "price",
            Role::Weight => "weight",
        }
    }
}

/// Fixed synonym table: lowercased header text → semantic role.
///
/// The vocabulary is Russian, matching the supported price-list sources.
/// Lookups lowercase the header first, so matching is case-insensitive.
const SYNONYMS: &[(&str, Role)] = &[
    ("название", Role::Name),
    ("продукт", Role::Name),
    ("товар", Role::Name),
    ("наименование", Role::Name),
    ("цена", Role::Price),
    ("розница", Role::Price),
    ("фасовка", Role::Weight),
    ("масса", Role::Weight),
    ("вес", Role::Weight),
];

fn role_of(header: &str) -> Option<Role> {
    let lowered = header.trim().to_lowercase();
    SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == lowered)
        .map(|&(_, role)| role)
}

// ---------------------------------------------------------------------------
// HeaderMap – resolved column positions
// ---------------------------------------------------------------------------

/// Column index per role, `None` where no synonym matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderMap {
    pub name: Option<usize>,
    pub price: Option<usize>,
    pub weight: Option<usize>,
}

/// Column indices once all three roles resolved.
#[derive(Debug, Clone, Copy)]
pub struct Columns {
    pub name: usize,
    pub price: usize,
    pub weight: usize,
}

impl HeaderMap {
    /// All three indices, or `None` if any role is unresolved.
    pub fn columns(&self) -> Option<Columns> {
        Some(Columns {
            name: self.name?,
            price: self.price?,
            weight: self.weight?,
        })
    }

    /// Roles still unresolved, for the missing-columns warning.
    pub fn missing_roles(&self) -> Vec<Role> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(Role::Name);
        }
        if self.price.is_none() {
            missing.push(Role::Price);
        }
        if self.weight.is_none() {
            missing.push(Role::Weight);
        }
        missing
    }
}

/// Resolve a header row to column indices.
///
/// The first column matching a role wins; later columns mapping to an
/// already-resolved role are ignored. Unknown headers are skipped.
pub fn resolve<'a, I>(headers: I) -> HeaderMap
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = HeaderMap::default();
    for (index, header) in headers.into_iter().enumerate() {
        match role_of(header) {
            Some(Role::Name) if map.name.is_none() => map.name = Some(index),
            Some(Role::Price) if map.price.is_none() => map.price = Some(index),
            Some(Role::Weight) if map.weight.is_none() => map.weight = Some(index),
            _ => {}
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_all_three_roles() {
        let map = resolve(["товар", "цена", "фасовка"]);
        assert_eq!(map.name, Some(0));
        assert_eq!(map.price, Some(1));
        assert_eq!(map.weight, Some(2));
        assert!(map.columns().is_some());
    }

    #[test]
    fn resolves_regardless_of_column_order_and_extras() {
        let map = resolve(["артикул", "розница", "наименование", "вес"]);
        assert_eq!(map.name, Some(2));
        assert_eq!(map.price, Some(1));
        assert_eq!(map.weight, Some(3));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let map = resolve(["НАЗВАНИЕ", "Цена", "МаССа"]);
        assert!(map.columns().is_some());
    }

    #[test]
    fn first_matching_column_wins() {
        // "продукт" and "название" both mean name; the earlier column sticks.
        let map = resolve(["продукт", "название", "цена", "вес"]);
        assert_eq!(map.name, Some(0));
    }

    #[test]
    fn missing_role_is_reported() {
        let map = resolve(["товар", "цена"]);
        assert_eq!(map.weight, None);
        assert!(map.columns().is_none());
        assert_eq!(map.missing_roles(), vec![Role::Weight]);
    }

    #[test]
    fn unknown_headers_resolve_nothing() {
        let map = resolve(["a", "b", "c"]);
        assert_eq!(map, HeaderMap::default());
        assert_eq!(
            map.missing_roles(),
            vec![Role::Name, Role::Price, Role::Weight]
        );
    }
}
