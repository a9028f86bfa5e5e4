use std::sync::RwLock;

use actix_web::{HttpResponse, Responder, get, put, web};

use rs_markov_core::{Chain, DEFAULT_LENGTH, GenerationInput, Generator, Seed};
use serde::Deserialize;
use tracing::info;

/// Largest corpus accepted by `PUT /v1/corpus`, in bytes.
const MAX_CORPUS_BYTES: usize = 16 * 1024 * 1024;

/// Largest `length` accepted by `GET /v1/generate`, in characters.
const MAX_LENGTH: usize = 1024 * 1024;

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
pub struct GenerateParams {
	length: Option<i64>, // negative -> empty output
	seed: Option<String>, // -> integer (negative = time) or "time"
	starter: Option<String>,
}

/// Query parameters for the `/v1/corpus` endpoint
#[derive(Deserialize)]
pub struct CorpusQuery {
	order: Option<i64>, // negative -> empty chain
}

impl CorpusQuery {
	/// Chain order, negative values clamped to 0.
	fn order(&self) -> usize {
		usize::try_from(self.order.unwrap_or(1)).unwrap_or(0)
	}
}

/// Chain shared by every worker.
///
/// Generation only needs read access; uploading a corpus swaps the chain.
#[derive(Default)]
pub struct SharedData {
	pub chain: Chain,
}

impl GenerateParams {
	/// Builds the generation input, applying defaults.
	fn generation_input(&self) -> Result<GenerationInput, String> {
		let seed = match &self.seed {
			None => Seed::Time,
			Some(s) => s.parse::<Seed>()?,
		};
		let length = match self.length {
			None => DEFAULT_LENGTH,
			Some(length) => usize::try_from(length).unwrap_or(0),
		};
		if length > MAX_LENGTH {
			return Err(format!("Length must be at most {MAX_LENGTH}, got {length}"));
		}
		Ok(GenerationInput::new(length)
			.with_seed(seed)
			.with_starter(self.starter.clone().unwrap_or_default()))
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates text from the current chain based on query parameters.
/// Returns the generated text as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<RwLock<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let shared_data = match data.read() {
		Ok(d) => d,
		Err(_) => return HttpResponse::InternalServerError().body("Chain lock failed"),
	};

	HttpResponse::Ok().body(Generator::new(&shared_data.chain).generate(&input))
}

/// HTTP GET endpoint `/v1/chain`
///
/// Returns the dimensions of the current chain as JSON.
#[get("/v1/chain")]
async fn get_chain(data: web::Data<RwLock<SharedData>>) -> impl Responder {
	match data.read() {
		Ok(shared_data) => HttpResponse::Ok().json(shared_data.chain.summary()),
		Err(_) => HttpResponse::InternalServerError().body("Chain lock failed"),
	}
}

/// HTTP PUT endpoint `/v1/corpus`
///
/// Builds a chain from the request body and replaces the current one.
#[put("/v1/corpus")]
async fn put_corpus(data: web::Data<RwLock<SharedData>>, query: web::Query<CorpusQuery>, body: String) -> impl Responder {
	// Build outside the lock, generation keeps running on the old chain
	let chain = Chain::build(&body, query.order());
	let summary = chain.summary();

	let mut shared_data = match data.write() {
		Ok(d) => d,
		Err(_) => return HttpResponse::InternalServerError().body("Chain lock failed"),
	};
	shared_data.chain = chain;
	info!(%summary, "corpus installed");

	HttpResponse::Ok().json(summary)
}

/// Registers every endpoint and the corpus size limit.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::PayloadConfig::new(MAX_CORPUS_BYTES))
		.service(get_generated)
		.service(get_chain)
		.service(put_corpus);
}
