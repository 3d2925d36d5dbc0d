use super::*;

// =============================================================
// search_plan
// =============================================================

#[test]
fn blank_query_fetches_all() {
    assert_eq!(search_plan(""), SearchPlan::FetchAll);
}

#[test]
fn whitespace_query_fetches_all() {
    assert_eq!(search_plan("   "), SearchPlan::FetchAll);
    assert_eq!(search_plan("\t\n"), SearchPlan::FetchAll);
}

#[test]
fn non_blank_query_searches() {
    assert_eq!(search_plan("ladoo"), SearchPlan::Query("ladoo".to_owned()));
}

#[test]
fn query_travels_verbatim() {
    // Surrounding whitespace only decides blank vs not; the raw text is
    // what reaches the server.
    assert_eq!(search_plan(" ladoo "), SearchPlan::Query(" ladoo ".to_owned()));
}
