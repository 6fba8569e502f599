//! HTML templates, compiled into the binary.

use minijinja::Environment;

const BASE_HTML: &str = include_str!("../templates/base.html");
const INDEX_HTML: &str = include_str!("../templates/index.html");
const SEARCH_HTML: &str = include_str!("../templates/search.html");
const OUTPUT_HTML: &str = include_str!("../templates/output.html");

/// Template environment with HTML auto-escaping (on by default for `.html`).
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", BASE_HTML)?;
    env.add_template("index.html", INDEX_HTML)?;
    env.add_template("search.html", SEARCH_HTML)?;
    env.add_template("output.html", OUTPUT_HTML)?;
    Ok(env)
}
