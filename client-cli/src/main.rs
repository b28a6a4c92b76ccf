use std::fs;
use std::path::Path;

use client_common::core::{Client, Session};
use common::{api, consts};
use eyre::WrapErr;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

fn setup_logger() -> eyre::Result<()> {
    let filter = EnvFilter::from_default_env()
        // Set the base level when not matched by other directives to WARN.
        .add_directive(LevelFilter::WARN.into())
        .add_directive("common=debug".parse()?)
        .add_directive("client_common=debug".parse()?)
        .add_directive("client_cli=debug".parse()?);

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("setting default subscriber failed")?;

    Ok(())
}

// The session file plays the role the browser's local storage plays for the
// web client: one `token` and one `name` entry, removed on logout.
fn load_session_from(path: &Path) -> Option<Session> {
    let data = fs::read_to_string(path).ok()?;
    let stored: serde_json::Value = serde_json::from_str(&data).ok()?;
    let token = stored.get(consts::SESSION_TOKEN_KEY)?.as_str()?.to_owned();
    let name = stored.get(consts::SESSION_NAME_KEY)?.as_str()?.to_owned();
    Some(Session { token, name })
}

fn save_session_to(path: &Path, session: &Session) -> eyre::Result<()> {
    let stored = serde_json::json!({
        (consts::SESSION_TOKEN_KEY): session.token,
        (consts::SESSION_NAME_KEY): session.name,
    });
    fs::write(path, stored.to_string()).wrap_err("saving session failed")?;
    Ok(())
}

fn save_session(session: &Session) {
    if let Err(e) = save_session_to(Path::new(consts::SESSION_PATH), session) {
        println!("could not save session: {:#}", e);
    }
}

fn print_api_error(e: &api::Error) {
    match e {
        api::Error::Validation(errors) => {
            for err in errors {
                println!("{}: {}", err.field, err.message);
            }
        }
        other => println!("{}", other),
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    setup_logger()?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut client = Client::new();
    if let Some(session) = load_session_from(Path::new(consts::SESSION_PATH)) {
        println!("welcome back, {}", session.name);
        client.adopt_session(session.token, session.name);
    }
    let mut mood = consts::DEFAULT_MOOD.to_owned();

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(consts::HISTORY_PATH).is_err() {
        println!("No previous history.");
    }
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match *line.split_ascii_whitespace().collect::<Vec<_>>().as_slice() {
                    ["signup", name, email, password, language] => {
                        let req = api::SignupRequest {
                            name: name.to_owned(),
                            email: email.to_owned(),
                            password: password.to_owned(),
                            language: language.to_owned(),
                        };
                        match rt.block_on(client.signup(req)) {
                            Ok(session) => {
                                println!("welcome, {}", session.name);
                                save_session(session);
                            }
                            Err(e) => print_api_error(&e),
                        }
                    }
                    ["login", email, password] => {
                        let req = api::LoginRequest {
                            email: email.to_owned(),
                            password: password.to_owned(),
                        };
                        match rt.block_on(client.login(req)) {
                            Ok(session) => {
                                println!("welcome back, {}", session.name);
                                save_session(session);
                            }
                            Err(e) => print_api_error(&e),
                        }
                    }
                    ["chat", ref words @ ..] if !words.is_empty() => {
                        let message = words.join(" ");
                        match rt.block_on(client.chat(&message, &mood)) {
                            Ok(reply) => println!("{}", reply),
                            Err(e) => print_api_error(&e),
                        }
                    }
                    ["mood", m] => {
                        mood = m.to_owned();
                        println!("mood set to {}", mood);
                    }
                    ["strength", password] => {
                        let report = client_common::password_strength(password);
                        println!(
                            "{} ({}%, {})",
                            report.strength, report.percentage, report.color
                        );
                        for hint in &report.feedback {
                            println!("  - {}", hint);
                        }
                    }
                    ["check", password] => {
                        let res = client_common::validate_password(password);
                        println!("{} (strength: {})", res.message, res.strength);
                    }
                    ["pwned", password] => {
                        match rt.block_on(client_common::pwned::breach_count(password)) {
                            Ok(0) => println!("not found in known breaches"),
                            Ok(n) => println!("seen in {} breaches, pick another one", n),
                            Err(e) => println!("breach lookup failed: {:#}", e),
                        }
                    }
                    ["google"] => {
                        println!("open this in a browser: {}", client.google_auth_url());
                        println!("then paste the result: token <token> <name>");
                    }
                    ["token", token, name] => {
                        let session =
                            client.adopt_session(token.to_owned(), name.to_owned());
                        println!("welcome, {}", session.name);
                        save_session(session);
                    }
                    ["whoami"] => match client.user_name() {
                        Some(name) => println!("{}", name),
                        None => println!("not logged in"),
                    },
                    ["logout"] => {
                        client.logout();
                        let _ = fs::remove_file(consts::SESSION_PATH);
                        println!("logged out");
                    }
                    [] => {}
                    _ => {
                        println!("commands: signup <name> <email> <password> <language> | login <email> <password> | chat <message...> | mood <mood> | strength <password> | check <password> | pwned <password> | google | token <token> <name> | whoami | logout");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history(consts::HISTORY_PATH)?;
    Ok(())
}
