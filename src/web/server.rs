use axum::http::header;
use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::core::types::Corpus;
use crate::core::verse::ChapterComparison;
use crate::parsing::reference::parse_reference;
use crate::resolve::engine::{Resolution, ResolveError, Resolver};
use crate::store::db::ScriptureStore;
use crate::store::directory::BookDirectory;
use crate::web::render::{self, Tab};

/// Shared application state: the read-only dataset and the book directory,
/// both loaded once at startup.
pub struct AppState {
    pub store: ScriptureStore,
    pub directory: BookDirectory,
}

/// Error response for the JSON API
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

/// Create an error response that logs detail server-side but never exposes
/// internals to the client.
fn safe_error(error_type: &str, user_message: &str, internal: Option<&str>) -> ErrorResponse {
    if let Some(internal) = internal {
        tracing::error!("Internal error ({error_type}): {internal}");
    }
    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the dataset cannot be opened, the tokio runtime
/// cannot be created, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the dataset is missing or unreadable (fatal: no view
/// can be served without it).
pub fn create_router(database: &Path) -> anyhow::Result<Router> {
    let store = ScriptureStore::open(database)?;
    let directory = BookDirectory::load(&store)?;
    let state = Arc::new(AppState { store, directory });

    let app = Router::new()
        .route("/", get(convert_handler))
        .route("/convert", get(convert_handler))
        .route("/chapter", get(chapter_handler))
        .route("/book", get(book_handler))
        .route("/links", get(links_handler))
        .route("/api/convert", get(api_convert_handler))
        .route("/static/css/styles.css", get(styles_css_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                // Every query is a bounded indexed lookup; anything slower
                // than this is a stuck client
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(ConcurrencyLimitLayer::new(100)),
        );

    Ok(app)
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router(&args.database)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting canon-xref web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Static CSS handler
async fn styles_css_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("static/css/styles.css"),
    )
}

/// Static links page (no dependency on the store)
async fn links_handler() -> Html<&'static str> {
    Html(include_str!("templates/links.html"))
}

#[derive(Deserialize)]
struct ConvertParams {
    reference: Option<String>,
    source: Option<Corpus>,
}

/// Verse Converter view: free-text reference in, aligned comparison out
async fn convert_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConvertParams>,
) -> Html<String> {
    let reference = params.reference.unwrap_or_default();
    let source = params.source.unwrap_or(Corpus::Lds);

    let mut body = render::converter_form(&reference, source);
    if !reference.trim().is_empty() {
        body.push_str(&convert_result_fragment(&state, &reference, source));
    }

    Html(render::page("Verse Converter", Tab::Converter, &body))
}

/// Resolve a converter query and render the outcome, recovering parse and
/// not-found conditions as corrective messages.
fn convert_result_fragment(state: &AppState, reference: &str, source: Corpus) -> String {
    let query = match parse_reference(reference, source, &state.directory) {
        Ok(query) => query,
        Err(e) => return render::message("error", &e.to_string()),
    };

    let resolver = Resolver::new(&state.store, &state.directory);
    match resolver.resolve(&query) {
        Ok(Resolution::Verses(pairs)) => render::verse_pairs(&pairs, source),
        Ok(Resolution::Chapter(chapter)) => render::chapter_panes(&chapter),
        Ok(Resolution::Book(book)) => {
            let mut out = String::new();
            for chapter in book {
                match chapter {
                    Ok(chapter) => out.push_str(&render::chapter_panes(&chapter)),
                    Err(e) => return render::message("error", &e.to_string()),
                }
            }
            out
        }
        Err(ResolveError::NotFound { reference, corpus }) => render::message(
            "warn",
            &format!("Could not find {reference} in the {corpus} canon."),
        ),
        Err(ResolveError::Store(e)) => {
            tracing::error!("store error in converter: {e}");
            render::message("error", "The dataset query failed. Please try again.")
        }
    }
}

#[derive(Deserialize)]
struct ChapterParams {
    corpus: Option<Corpus>,
    volume: Option<i64>,
    book: Option<i64>,
    chapter: Option<u32>,
}

/// Chapter Explorer view: corpus -> volume -> book -> chapter navigation,
/// then a dual-pane read of the selected chapter.
///
/// Navigation state lives entirely in the query string; each request
/// rebuilds the dropdown chain from scratch.
async fn chapter_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChapterParams>,
) -> Response {
    let corpus = params.corpus.unwrap_or(Corpus::Lds);

    let mut body = String::from("<form method=\"get\" action=\"/chapter\" class=\"navigation\">\n");
    body.push_str(&render::select(
        "corpus",
        "Corpus",
        &[
            ("lds".to_string(), "LDS".to_string()),
            ("rlds".to_string(), "RLDS".to_string()),
        ],
        Some(&corpus.short_name().to_lowercase()),
    ));

    let volumes = match state.store.volumes(corpus) {
        Ok(volumes) => volumes,
        Err(e) => return store_failure_page(Tab::Chapter, &e.to_string()),
    };
    let volume_options: Vec<(String, String)> = volumes
        .iter()
        .map(|v| (v.id.to_string(), v.title.clone()))
        .collect();
    let selected_volume = params
        .volume
        .filter(|id| volumes.iter().any(|v| v.id == *id));
    body.push_str(&render::select(
        "volume",
        "Volume",
        &volume_options,
        selected_volume.map(|id| id.to_string()).as_deref(),
    ));

    let books = match selected_volume {
        Some(volume_id) => match state.store.books_for_volume(volume_id) {
            Ok(books) => books,
            Err(e) => return store_failure_page(Tab::Chapter, &e.to_string()),
        },
        None => Vec::new(),
    };
    let book_options: Vec<(String, String)> = books
        .iter()
        .map(|b| (b.id.to_string(), b.title.clone()))
        .collect();
    let selected_book = params.book.and_then(|id| books.iter().find(|b| b.id == id));
    body.push_str(&render::select(
        "book",
        "Book",
        &book_options,
        selected_book.map(|b| b.id.to_string()).as_deref(),
    ));

    let chapters = match selected_book {
        Some(book) => match state.store.chapters_for_book(book.id) {
            Ok(chapters) => chapters,
            Err(e) => return store_failure_page(Tab::Chapter, &e.to_string()),
        },
        None => Vec::new(),
    };
    let chapter_options: Vec<(String, String)> = chapters
        .iter()
        .map(|c| (c.number.to_string(), c.number.to_string()))
        .collect();
    let selected_chapter = params
        .chapter
        .filter(|n| chapters.iter().any(|c| c.number == *n));
    body.push_str(&render::select(
        "chapter",
        "Chapter",
        &chapter_options,
        selected_chapter.map(|n| n.to_string()).as_deref(),
    ));
    body.push_str("</form>\n");

    if let (Some(book), Some(chapter)) = (selected_book, selected_chapter) {
        let resolver = Resolver::new(&state.store, &state.directory);
        match resolver.resolve_chapter(corpus, &book.title, chapter) {
            Ok(comparison) => body.push_str(&render::chapter_panes(&comparison)),
            Err(ResolveError::NotFound { reference, corpus }) => body.push_str(&render::message(
                "warn",
                &format!("Could not find {reference} in the {corpus} canon."),
            )),
            Err(ResolveError::Store(e)) => return store_failure_page(Tab::Chapter, &e.to_string()),
        }
    }

    Html(render::page("Chapter Explorer", Tab::Chapter, &body)).into_response()
}

#[derive(Deserialize)]
struct BookParams {
    corpus: Option<Corpus>,
    book: Option<String>,
}

/// Full Book Comparator view: pick a corpus and book, read the whole book
/// side by side. Chapters are fetched lazily while the page is built.
async fn book_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BookParams>,
) -> Response {
    let corpus = params.corpus.unwrap_or(Corpus::Lds);

    let mut body = String::from("<form method=\"get\" action=\"/book\" class=\"navigation\">\n");
    body.push_str(&render::select(
        "corpus",
        "Source Corpus",
        &[
            ("lds".to_string(), "LDS".to_string()),
            ("rlds".to_string(), "RLDS".to_string()),
        ],
        Some(&corpus.short_name().to_lowercase()),
    ));

    let book_options: Vec<(String, String)> = state
        .directory
        .books(corpus)
        .iter()
        .map(|b| (b.title.clone(), b.title.clone()))
        .collect();
    body.push_str(&render::select(
        "book",
        "Book",
        &book_options,
        params.book.as_deref(),
    ));
    body.push_str("</form>\n");

    if let Some(book) = params.book.as_deref().filter(|b| !b.is_empty()) {
        let resolver = Resolver::new(&state.store, &state.directory);
        match resolver.resolve_book(corpus, book) {
            Ok(comparison) => {
                for chapter in comparison {
                    match chapter {
                        Ok(chapter) => body.push_str(&render::chapter_panes(&chapter)),
                        Err(e) => return store_failure_page(Tab::Book, &e.to_string()),
                    }
                }
            }
            Err(ResolveError::NotFound { reference, corpus }) => body.push_str(&render::message(
                "warn",
                &format!("Could not find {reference} in the {corpus} canon."),
            )),
            Err(ResolveError::Store(e)) => return store_failure_page(Tab::Book, &e.to_string()),
        }
    }

    Html(render::page("Full Book Comparator", Tab::Book, &body)).into_response()
}

/// API endpoint mirroring the Verse Converter: structured conversion results
/// for scripting.
async fn api_convert_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConvertParams>,
) -> Response {
    let Some(reference) = params.reference.filter(|r| !r.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(safe_error(
                "missing_reference",
                "No reference supplied. Pass ?reference=...",
                None,
            )),
        )
            .into_response();
    };
    let source = params.source.unwrap_or(Corpus::Lds);

    let query = match parse_reference(&reference, source, &state.directory) {
        Ok(query) => query,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(safe_error("parse_error", &e.to_string(), None)),
            )
                .into_response();
        }
    };

    let resolver = Resolver::new(&state.store, &state.directory);
    match resolver.resolve(&query) {
        Ok(Resolution::Verses(pairs)) => Json(serde_json::json!({
            "query": query,
            "granularity": query.granularity(),
            "pairs": pairs,
        }))
        .into_response(),
        Ok(Resolution::Chapter(chapter)) => Json(serde_json::json!({
            "query": query,
            "granularity": query.granularity(),
            "chapter": chapter,
        }))
        .into_response(),
        Ok(Resolution::Book(book)) => {
            let chapters: Result<Vec<ChapterComparison>, _> = book.collect();
            match chapters {
                Ok(chapters) => Json(serde_json::json!({
                    "query": query,
                    "granularity": query.granularity(),
                    "chapters": chapters,
                }))
                .into_response(),
                Err(e) => internal_error(&e.to_string()),
            }
        }
        Err(ResolveError::NotFound { reference, corpus }) => (
            StatusCode::NOT_FOUND,
            Json(safe_error(
                "not_found",
                &format!("{reference} was not found in the {corpus} canon"),
                None,
            )),
        )
            .into_response(),
        Err(ResolveError::Store(e)) => internal_error(&e.to_string()),
    }
}

fn internal_error(internal: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(safe_error(
            "store_error",
            "The dataset query failed",
            Some(internal),
        )),
    )
        .into_response()
}

fn store_failure_page(tab: Tab, internal: &str) -> Response {
    tracing::error!("store error: {internal}");
    let body = render::message("error", "The dataset query failed. Please try again.");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render::page("Error", tab, &body)),
    )
        .into_response()
}
