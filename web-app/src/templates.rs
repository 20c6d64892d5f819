use std::{env, fs, path::PathBuf};

use include_dir::{include_dir, Dir};
use rocket::{
    fairing::{self, Fairing, Info, Kind},
    http::Status,
    request::{self, FromRequest, Outcome},
    response::{
        content::{RawCss, RawHtml},
        Responder,
    },
    tokio::sync::RwLock,
    Build, Request, Rocket, State,
};
use tera::{Context, Tera};
use thiserror::Error;

use crate::{error::Error, table::MemberTable};

static TEMPLATE_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");
static STYLE: &str = include_str!("../webroot/style.css");

const MEMBERS_TEMPLATE: &str = "members.html";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Could not read directory '{0}'. {1}")]
    FailedToReadDirectory(PathBuf, std::io::Error),
    #[error("Tera encountered an error. {0}")]
    TeraError(#[from] tera::Error),
    #[error("Failed to read file. {0}")]
    FileReadError(std::io::Error),
}

pub struct TemplateFairing;

impl TemplateFairing {
    pub fn fairing() -> Self {
        Self {}
    }
}

#[rocket::async_trait]
impl Fairing for TemplateFairing {
    fn info(&self) -> Info {
        Info {
            name: "Template",
            kind: Kind::Ignite | Kind::Singleton,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
        let debug_mode = if let Ok(path) = env::var("TEMPLATE_DIR") {
            if path.is_empty() {
                error!("Could not load alternative templates. TEMPLATE_DIR is empty.");
                return Err(rocket);
            }
            Some(PathBuf::from(path))
        } else {
            None
        };

        let rocket = if debug_mode.is_some() {
            rocket.mount("/template", routes![refresh])
        } else {
            rocket
        };

        let templates = match Templates::new(debug_mode) {
            Ok(templates) => templates,
            Err(e) => {
                error!("Could not create page renderer. {e}");
                return Err(rocket);
            }
        };

        Ok(rocket.manage(templates))
    }
}

#[get("/refresh")]
async fn refresh(template: &State<Templates>) -> Result<(), Error> {
    template.refresh().await?;
    Ok(())
}

pub struct Webpage(RawHtml<String>);

impl From<String> for Webpage {
    fn from(value: String) -> Self {
        Self(RawHtml(value))
    }
}

impl<'r> Responder<'r, 'static> for Webpage {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        self.0.respond_to(request)
    }
}

/// Compiled templates and the stylesheet.
///
/// With a `debug_mode` path both are read from disk below it and can be
/// reloaded through `/template/refresh`. Otherwise the copies embedded at
/// build time are used.
pub struct Templates {
    debug_mode: Option<PathBuf>,
    tera: RwLock<Tera>,
    style: RwLock<String>,
}

impl Templates {
    fn new(debug_mode: Option<PathBuf>) -> Result<Self, TemplateError> {
        let tera = RwLock::new(load_templates(&debug_mode)?);
        let style = RwLock::new(load_styling(&debug_mode)?);

        Ok(Self {
            debug_mode,
            tera,
            style,
        })
    }

    async fn refresh(&self) -> Result<(), Error> {
        let mut tera = self.tera.write().await;
        *tera = load_templates(&self.debug_mode)?;

        let mut style = self.style.write().await;
        *style = load_styling(&self.debug_mode)?;
        Ok(())
    }
}

pub struct PageRenderer<'r> {
    templates: &'r Templates,
    context: Context,
}

impl<'r> PageRenderer<'r> {
    pub async fn style(&self) -> RawCss<String> {
        RawCss(self.templates.style.read().await.clone())
    }

    pub async fn members(&mut self, table: &MemberTable) -> Result<Webpage, Error> {
        let tera = self.templates.tera.read().await;
        Ok(render_members(&tera, &mut self.context, table).map(Into::into)?)
    }
}

/// Renders `table` into the members page using `context` as the base.
pub fn render_members(
    tera: &Tera,
    context: &mut Context,
    table: &MemberTable,
) -> Result<String, tera::Error> {
    context.insert("table", table);
    tera.render(MEMBERS_TEMPLATE, context)
}

fn load_styling(debug_mode: &Option<PathBuf>) -> Result<String, TemplateError> {
    if let Some(path) = debug_mode {
        fs::read_to_string(path.join("webroot/style.css")).map_err(TemplateError::FileReadError)
    } else {
        Ok(STYLE.to_string())
    }
}

// Templates are keyed by their full file name so that Tera's autoescaping,
// which goes by extension, covers member text.
fn load_templates(debug_mode: &Option<PathBuf>) -> Result<Tera, TemplateError> {
    let mut templates = Vec::new();
    if let Some(path) = debug_mode {
        let dir = path.join("templates");
        let files = dir
            .read_dir()
            .map_err(|e| TemplateError::FailedToReadDirectory(dir.clone(), e))?
            .flatten()
            .filter(|file| file.path().is_file());
        for file in files {
            let contents = fs::read_to_string(file.path()).map_err(TemplateError::FileReadError)?;
            templates.push((file.file_name().to_string_lossy().to_string(), contents));
        }
        info!("Loaded {} templates from '{}'.", templates.len(), dir.display());
    } else {
        for file in TEMPLATE_DIR.files() {
            if let Some(filename) = file.path().file_name() {
                let filename = filename.to_string_lossy();
                let template = String::from_utf8_lossy(file.contents());
                templates.push((filename.to_string(), template.to_string()));
            }
        }
        info!("Loaded {} embedded templates.", templates.len());
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(templates)?;
    Ok(tera)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for PageRenderer<'r> {
    type Error = Error;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let context = Context::default();

        let guard = req.guard::<&State<Templates>>().await;
        let templates = match guard {
            Outcome::Success(templates) => templates,
            Outcome::Error(_) => {
                return Outcome::Error((Status::InternalServerError, Error::TemplateNotFound))
            }
            Outcome::Forward(f) => return Outcome::Forward(f),
        };

        Outcome::Success(PageRenderer { templates, context })
    }
}
