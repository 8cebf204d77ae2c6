//! Record collections used across the integration tests.

use trellis_core::{attrs, Attributes};

/// Flat region catalogue: two top-level regions, districts under the first,
/// cities at the deepest level. Ids 1 and 2 are top level, 3-10 sit under 1,
/// 11 under 2, 12-16 under 3, 17-21 under 5 and 22-26 under 18.
pub fn region_tree() -> Vec<Attributes> {
    vec![
        attrs! { "id" => 1, "text" => "Domestic" },
        attrs! { "id" => 2, "text" => "Overseas" },
        attrs! { "id" => 3, "text" => "North", "pid" => 1 },
        attrs! { "id" => 4, "text" => "Northeast", "pid" => 1 },
        attrs! { "id" => 5, "text" => "East", "pid" => 1 },
        attrs! { "id" => 6, "text" => "Central", "pid" => 1 },
        attrs! { "id" => 7, "text" => "South", "pid" => 1 },
        attrs! { "id" => 8, "text" => "Southwest", "pid" => 1 },
        attrs! { "id" => 9, "text" => "Northwest", "pid" => 1 },
        attrs! { "id" => 10, "text" => "Other", "pid" => 1 },
        attrs! { "id" => 11, "text" => "Atlantic", "pid" => 2 },
        attrs! { "id" => 12, "text" => "Bayfield", "pid" => 3 },
        attrs! { "id" => 13, "text" => "Tidewater", "pid" => 3 },
        attrs! { "id" => 14, "text" => "Ridgeline", "pid" => 3 },
        attrs! { "id" => 15, "text" => "Meadowvale", "pid" => 3 },
        attrs! { "id" => 16, "text" => "Stonegate", "pid" => 3 },
        attrs! { "id" => 17, "text" => "Harborview", "pid" => 5 },
        attrs! { "id" => 18, "text" => "Fairbank", "pid" => 5 },
        attrs! { "id" => 19, "text" => "Lakeside", "pid" => 5 },
        attrs! { "id" => 20, "text" => "Riverton", "pid" => 5 },
        attrs! { "id" => 21, "text" => "Westbrook", "pid" => 5 },
        attrs! { "id" => 22, "text" => "Fairbank Port", "pid" => 18 },
        attrs! { "id" => 23, "text" => "Fairbank Mills", "pid" => 18 },
        attrs! { "id" => 24, "text" => "Fairbank Heights", "pid" => 18 },
        attrs! { "id" => 25, "text" => "Fairbank Junction", "pid" => 18 },
        attrs! { "id" => 26, "text" => "Fairbank Old Town", "pid" => 18 },
    ]
}

/// The four-node tree 1 -> (2, 3 -> (4)), flat shape.
pub fn small_tree() -> Vec<Attributes> {
    vec![
        attrs! { "id" => 1 },
        attrs! { "id" => 2, "pid" => 1 },
        attrs! { "id" => 3, "pid" => 1 },
        attrs! { "id" => 4, "pid" => 3 },
    ]
}

/// The same four-node tree in the nested shape.
pub fn small_tree_nested() -> Vec<Attributes> {
    vec![attrs! {
        "id" => 1,
        "child" => vec![
            attrs! { "id" => 2 },
            attrs! { "id" => 3, "child" => vec![attrs! { "id" => 4 }] },
        ],
    }]
}
