// Provider Wire Tests
//
// Purpose: Run the real HTTP provider clients against a local axum listener
// and check what goes over the wire (path, bearer header, JSON body) plus the
// error mapping for rejected credentials and slow responses
// Run with: cargo test --test provider_wire_tests

#[cfg(feature = "api")]
mod wire_tests {
    use axum::{
        extract::State,
        http::{header, HeaderMap, StatusCode},
        response::IntoResponse,
        routing::post,
        Json, Router,
    };
    use footprint_2050::narrative::prompt::build_request;
    use footprint_2050::providers::{
        CarbonAccounting, CarbonApiClient, OpenAiClient, ProviderError, TextGenerator,
    };
    use footprint_2050::{summarize, AnswerSet, Footprint, QuestionKey};
    use rustc_hash::FxHashMap;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Authorization header and JSON body of each received request
    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    fn record(seen: &Seen, headers: &HeaderMap, body: Value) {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        seen.lock().unwrap().push((auth, body));
    }

    async fn carbon_ok(State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
        record(&seen, &headers, body);
        Json(serde_json::json!({ "total": 4321.5, "unit": "kg" }))
    }

    async fn completion_ok(State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
        record(&seen, &headers, body);
        Json(serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "Green skies.\n- Plant trees" } }]
        }))
    }

    async fn unauthorized() -> impl IntoResponse {
        (StatusCode::UNAUTHORIZED, "invalid api key")
    }

    async fn slow() -> Json<Value> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Json(serde_json::json!({ "total": 1.0 }))
    }

    // Helper: Serve a router on an ephemeral local port, returning its base URL
    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn best_answers() -> AnswerSet {
        let raw: FxHashMap<String, String> = [
            ("meat_dairy", "less_20"),
            ("transport", "walk_cycle"),
            ("flights", "none"),
            ("home_energy_source", "renewable"),
            ("home_efficiency", "very"),
            ("recycling", "always"),
            ("sustainable_shopping", "most"),
            ("carbon_awareness", "high"),
            ("device_usage", "less_2"),
            ("food_waste", "almost_none"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        AnswerSet::from_form(&raw).unwrap()
    }

    // =========================================================================
    // Carbon-accounting client
    // =========================================================================

    #[tokio::test]
    async fn test_carbon_api_sends_bearer_and_answer_set() {
        let seen = Seen::default();
        let base = spawn(
            Router::new()
                .route("/footprint", post(carbon_ok))
                .with_state(seen.clone()),
        )
        .await;

        let client = CarbonApiClient::new(&format!("{}/footprint", base), "carbon-key", Duration::from_secs(5)).unwrap();
        let total = client.total_kg(&best_answers()).await.unwrap();
        assert_eq!(total, 4321.5);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (auth, body) = &seen[0];
        assert_eq!(auth.as_deref(), Some("Bearer carbon-key"));

        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 10);
        for key in QuestionKey::ALL {
            assert!(object.contains_key(key.as_str()), "body lacks {}", key);
        }
        assert_eq!(body["meat_dairy"], "less_20");
        assert_eq!(body["food_waste"], "almost_none");
    }

    #[tokio::test]
    async fn test_carbon_api_rejected_key_is_unauthorized() {
        let base = spawn(Router::new().route("/footprint", post(unauthorized))).await;

        let client = CarbonApiClient::new(&format!("{}/footprint", base), "bad-key", Duration::from_secs(5)).unwrap();
        let result = client.total_kg(&best_answers()).await;
        assert!(matches!(result, Err(ProviderError::Unauthorized(401))), "{:?}", result);
    }

    #[tokio::test]
    async fn test_carbon_api_slow_response_times_out() {
        let base = spawn(Router::new().route("/footprint", post(slow))).await;

        let timeout = Duration::from_millis(100);
        let client = CarbonApiClient::new(&format!("{}/footprint", base), "carbon-key", timeout).unwrap();
        let result = client.total_kg(&best_answers()).await;
        assert!(matches!(result, Err(ProviderError::Timeout(t)) if t == timeout), "{:?}", result);
    }

    // =========================================================================
    // Text-generation client
    // =========================================================================

    #[tokio::test]
    async fn test_openai_posts_chat_completion() {
        let seen = Seen::default();
        let base = spawn(
            Router::new()
                .route("/v1/chat/completions", post(completion_ok))
                .with_state(seen.clone()),
        )
        .await;

        let client = OpenAiClient::new(&format!("{}/v1/", base), "openai-key", Duration::from_secs(5)).unwrap();
        let answers = best_answers();
        let request = build_request("test-model", &summarize(&answers), Footprint::new(1967.7).unwrap());
        let content = client.generate(&request).await.unwrap();
        assert_eq!(content, "Green skies.\n- Plant trees");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (auth, body) = &seen[0];
        assert_eq!(auth.as_deref(), Some("Bearer openai-key"));
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["max_tokens"], 400);
        assert!((body["temperature"].as_f64().unwrap() - 0.8).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert!(body["messages"][1]["content"].as_str().unwrap().contains("1967.7 kg CO2"));
    }

    #[tokio::test]
    async fn test_openai_rejected_key_is_unauthorized() {
        let base = spawn(Router::new().route("/v1/chat/completions", post(unauthorized))).await;

        let client = OpenAiClient::new(&format!("{}/v1", base), "bad-key", Duration::from_secs(5)).unwrap();
        let request = build_request("test-model", &summarize(&best_answers()), Footprint::new(1967.7).unwrap());
        let result = client.generate(&request).await;
        assert!(matches!(result, Err(ProviderError::Unauthorized(401))), "{:?}", result);
    }

    #[tokio::test]
    async fn test_openai_slow_response_times_out() {
        let base = spawn(Router::new().route("/v1/chat/completions", post(slow))).await;

        let timeout = Duration::from_millis(100);
        let client = OpenAiClient::new(&format!("{}/v1", base), "openai-key", timeout).unwrap();
        let request = build_request("test-model", &summarize(&best_answers()), Footprint::new(1967.7).unwrap());
        let result = client.generate(&request).await;
        assert!(matches!(result, Err(ProviderError::Timeout(t)) if t == timeout), "{:?}", result);
    }
}
