use axum::extract::State;
use pretty_assertions::assert_eq;

use crate::test_utils::TestContext;
use freeslot_api::handlers::experts::get_expert_list;

#[tokio::test]
async fn test_expert_list_is_fixed_and_ordered() {
    let ctx = TestContext::new();

    let response = get_expert_list(State(ctx.into_state())).await;

    assert_eq!(
        response.0,
        vec!["Person1", "Person2", "Person3", "Person4", "Person5"]
    );
}
