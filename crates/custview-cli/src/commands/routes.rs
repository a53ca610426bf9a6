//! `cvw routes` — List the routes the viewer understands.

use custview_page::route::route_table;

/// Executes the `routes` command.
pub fn execute() {
    println!("{:<24} DESCRIPTION", "PATTERN");
    for entry in route_table() {
        println!("{:<24} {}", entry.pattern, entry.description);
    }
}
