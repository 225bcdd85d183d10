use std::env;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use log::{error, info};

use serde::Deserialize;
use langgen_core::model::language::DEFAULT_KEY;
use langgen_core::model::{Language, Mode};

/// Query parameters for the `/v1/name` and `/v1/word` endpoints
#[derive(Deserialize)]
struct KeyQuery {
	key: Option<String>
}

#[derive(Deserialize)]
struct ResetQuery {
	mode: Option<String>,
	seed: Option<u64>
}

struct SharedData {
	language: Language
}

/// Server settings read from the environment.
///
/// - `LANGGEN_BIND`: address to bind (default `127.0.0.1:5000`)
/// - `LANGGEN_MODE`: `random` (default) or `ortho`
/// - `LANGGEN_SEED`: optional seed for a reproducible language
struct ServerConfig {
	bind: String,
	mode: Mode,
	seed: Option<u64>
}

impl ServerConfig {
	fn from_env() -> Result<Self, String> {
		let bind = env::var("LANGGEN_BIND").unwrap_or_else(|_| "127.0.0.1:5000".to_owned());
		let mode = match env::var("LANGGEN_MODE") {
			Ok(s) => parse_mode(&s)?,
			Err(_) => Mode::Random,
		};
		let seed = match env::var("LANGGEN_SEED") {
			Ok(s) => Some(s.parse::<u64>().map_err(|_| format!("LANGGEN_SEED must be an integer, got {s:?}"))?),
			Err(_) => None,
		};
		Ok(Self { bind, mode, seed })
	}
}

fn parse_mode(s: &str) -> Result<Mode, String> {
	match s.to_lowercase().as_str() {
		"random" => Ok(Mode::Random),
		"ortho" | "orthographic" => Ok(Mode::Orthographic),
		_ => Err(format!("Mode must be 'random' or 'ortho', got {s:?}")),
	}
}

fn build_language(mode: Mode, seed: Option<u64>) -> Result<Language, String> {
	let language = match seed {
		Some(seed) => Language::from_seed(mode, seed),
		None => Language::new(mode),
	};
	language.map_err(|e| e.to_string())
}

/// HTTP GET endpoint `/v1/name`
///
/// Generates a new name, optionally scoped by `key`.
#[get("/v1/name")]
async fn get_name(data: web::Data<Mutex<SharedData>>, query: web::Query<KeyQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Language lock failed"),
	};
	let key = query.key.as_deref().unwrap_or(DEFAULT_KEY);
	HttpResponse::Ok().body(shared_data.language.make_name(key))
}

/// HTTP GET endpoint `/v1/word`
///
/// Returns a pooled word, optionally scoped by `key`.
#[get("/v1/word")]
async fn get_word(data: web::Data<Mutex<SharedData>>, query: web::Query<KeyQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Language lock failed"),
	};
	let key = query.key.as_deref().unwrap_or(DEFAULT_KEY);
	HttpResponse::Ok().body(shared_data.language.get_word(key))
}

#[get("/v1/alphabet")]
async fn get_alphabet(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Language lock failed"),
	};
	HttpResponse::Ok().body(shared_data.language.get_alphabet())
}

#[get("/v1/language")]
async fn get_language(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Language lock failed"),
	};
	HttpResponse::Ok().json(shared_data.language.describe())
}

/// HTTP PUT endpoint `/v1/reset`
///
/// Replaces the current language, dropping every generated word and name.
#[put("/v1/reset")]
async fn put_reset(data: web::Data<Mutex<SharedData>>, query: web::Query<ResetQuery>) -> impl Responder {
	let mode = match query.mode.as_deref().map(parse_mode) {
		Some(Ok(mode)) => mode,
		Some(Err(e)) => return HttpResponse::BadRequest().body(e),
		None => Mode::Random,
	};

	let language = match build_language(mode, query.seed) {
		Ok(l) => l,
		Err(e) => {
			error!("failed to build language: {e}");
			return HttpResponse::InternalServerError().body(format!("Failed to build language: {e}"));
		}
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Language lock failed"),
	};
	shared_data.language = language;
	info!("language reset ({mode:?}, seed {:?})", query.seed);

	HttpResponse::Ok().body("Language reset successfully")
}

/// Browsers on other origins may read; only same-origin clients may reset.
fn cors() -> Cors {
	Cors::default()
		.allow_any_origin()
		.allowed_methods(vec!["GET"])
		.max_age(3600)
}

/// Main entry point for the server.
///
/// Builds one language, wraps it in a `Mutex`, and serves it over HTTP.
///
/// # Notes
/// - Generation never fails but may take unbounded time on pathological
///   configurations; the lock is held for the whole call.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
	let language = build_language(config.mode, config.seed).map_err(std::io::Error::other)?;
	info!("serving a {:?} language on {}", config.mode, config.bind);

	let shared_data = SharedData { language };
	let shared_language = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(cors())
			.app_data(shared_language.clone())
			.service(get_name)
			.service(get_word)
			.service(get_alphabet)
			.service(get_language)
			.service(put_reset)
	})
		.bind(config.bind.as_str())?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use actix_web::http::{Method, header};
	use actix_web::test;

	use super::*;

	fn preflight(method: &str) -> test::TestRequest {
		test::TestRequest::default()
			.method(Method::OPTIONS)
			.uri("/v1/reset")
			.insert_header((header::ORIGIN, "https://elsewhere.example"))
			.insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, method))
	}

	#[actix_web::test]
	async fn cross_origin_reset_is_refused() {
		let app = test::init_service(App::new().wrap(cors()).service(get_alphabet).service(put_reset)).await;

		let get = test::call_service(&app, preflight("GET").to_request()).await;
		assert!(get.status().is_success());

		let put = test::try_call_service(&app, preflight("PUT").to_request()).await;
		assert!(put.map_or(true, |resp| resp.status().is_client_error()));
	}
}
