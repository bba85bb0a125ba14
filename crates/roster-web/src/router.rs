use crate::api_docs::ApiDocs;
use crate::config::Config;
use crate::constants::MAX_FILE_SIZE_BYTES;
use crate::handlers;
use log::info;
use rocket::data::ByteUnit;
use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::http::Method;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use rocket_dyn_templates::Template;
use roster_api::service::ServiceContext;
use serde::Serialize;
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    error: &'static str,
    message: String,
    code: u16,
}

impl ErrorResponse {
    pub fn new(error: &'static str, message: String, code: u16) -> Self {
        Self {
            error,
            message,
            code,
        }
    }

    pub fn to_json_string(&self) -> String {
        json!({ "error": self.error, "message": self.message }).to_string()
    }
}

pub fn rocket_main(conf: Config, context: ServiceContext) -> Rocket<Build> {
    let config = Figment::from(rocket::Config::default())
        .merge(("limits.forms", ByteUnit::Byte(MAX_FILE_SIZE_BYTES as u64)))
        .merge(("limits.file", ByteUnit::Byte(MAX_FILE_SIZE_BYTES as u64)))
        .merge((
            "limits.data-form",
            ByteUnit::Byte(MAX_FILE_SIZE_BYTES as u64),
        ))
        .merge(("port", conf.http_port))
        .merge(("address", conf.http_address.to_owned()))
        .merge(("template_dir", conf.template_dir.to_owned()));

    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_headers(AllowedHeaders::all())
        .allowed_methods(
            vec![
                Method::Get,
                Method::Post,
                Method::Patch,
                Method::Put,
                Method::Delete,
                Method::Options,
            ]
            .into_iter()
            .map(From::from)
            .collect(),
        )
        .allow_credentials(true)
        .to_cors()
        .expect("Cors setup failed");

    let rocket = rocket::custom(config)
        .attach(cors.clone())
        .attach(Template::fairing())
        // catchers for CORS and API errors
        .mount("/api/", rocket_cors::catch_all_options_routes())
        .mount("/api/", routes![handlers::default_api_error_catcher])
        .register("/api/", catchers![not_found])
        .manage(context)
        .manage(cors)
        .mount("/api/status", routes![handlers::status])
        .mount(
            "/api/contacts",
            routes![
                handlers::contacts::return_contacts,
                handlers::contacts::return_contact,
                handlers::contacts::new_contact,
                handlers::contacts::remove_contact,
                handlers::contacts::upload_file,
                handlers::contacts::get_temp_file,
            ],
        )
        .mount(
            "/",
            SwaggerUi::new("/api/swagger-ui/<_..>")
                .url("/api/api-docs/openapi.json", ApiDocs::openapi()),
        )
        .mount("/static", FileServer::from(&conf.frontend_serve_folder))
        .mount(
            &conf.frontend_url_path,
            routes![
                handlers::views::list_view,
                handlers::views::remove_contact_view,
                handlers::views::create_view,
                handlers::views::create_contact_view,
            ],
        );

    info!("HTTP Server Listening on {}", conf.http_listen_url());

    if conf.launch_frontend_at_startup {
        match open::that(format!("{}{}", conf.http_listen_url(), &conf.frontend_url_path).as_str())
        {
            Ok(_) => {}
            Err(_) => {
                info!("Can't open browser.")
            }
        }
    }

    rocket
}

#[catch(404)]
fn not_found(req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "not_found",
        format!("We couldn't find the requested path '{}'", req.uri()),
        404,
    ))
}
