use std::error::Error;

use futures::future::BoxFuture;
use rigs_conditional::presets::{self, INTERNAL_DOCUMENT_SEARCH, THINK, WEB_SEARCH, WIKIPEDIA};
use rigs_conditional::search::{SearchBackend, SearchError, SearchRequest, WebSearch};
use rigs_conditional::session::SessionStore;
use serde_json::{Value, json};

/// Answers every query with a fixed provider payload, nested the way tool
/// adapters return it.
struct CannedBackend;

impl SearchBackend for CannedBackend {
    fn call(&self, arguments: Value) -> BoxFuture<'static, Result<Value, SearchError>> {
        let query = arguments["query"].as_str().unwrap_or_default().to_owned();
        Box::pin(async move {
            let text = format!(
                "Title: {query} keynote announced\nURL: https://news.example.com/keynote\nContent: The agenda is out.\n\
                 Title: {query} funding round\nURL: https://news.example.com/funding\nContent: Series C closed."
            );
            let inner = json!([{ "type": "text", "text": text }]).to_string();
            Ok(json!([{ "type": "text", "text": inner }]))
        })
    }
}

// Walks a scripted agent through the conference prep requirements, printing
// what the agent may call at each step.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let store = SessionStore::new(presets::conference_prep()?);
    let session = store.open();
    let search = WebSearch::new(CannedBackend);
    let candidates = [THINK, WEB_SEARCH, WIKIPEDIA, INTERNAL_DOCUMENT_SEARCH];

    // The "model" always picks the highest-ranked permitted tool, except that
    // it searches the web once it has read the internal documents.
    loop {
        let permitted = store.permitted_tools(&session, &candidates)?;
        println!("permitted: {permitted:?}");

        if store.is_satisfied(&session)? {
            println!("requirements satisfied, the agent may answer");
            break;
        }

        let trace = store.trace(&session)?;
        let choice = if trace.count(INTERNAL_DOCUMENT_SEARCH) > 0
            && permitted.iter().any(|tool| tool == WEB_SEARCH)
        {
            WEB_SEARCH.to_owned()
        } else {
            match permitted.first() {
                Some(tool) => tool.clone(),
                None => break,
            }
        };

        if choice == WEB_SEARCH {
            let response = search
                .search(&SearchRequest::builder("RustConf").max_results(2).build())
                .await?;
            println!("{response}");
        }

        let step = store.record_invocation(&session, choice.as_str())?;
        println!("step {step}: {choice}");
    }

    let trace = store.close(&session)?;
    println!("final trace: {trace}");
    Ok(())
}
