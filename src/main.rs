//! Schoolcore client CLI
//!
//! Small terminal front end over the client library: log in, register a
//! student, browse the roster

use anyhow::{Context, Result};
use schoolcore_client::models::auth::{LoginCredentials, LoginReply};
use schoolcore_client::models::school::{PageQuery, StudentUpdate};
use schoolcore_client::services::{CoreClient, RetryableCoreClient, RosterService};
use schoolcore_client::utils::logging::{init_logging, payload_log_summary};
use schoolcore_client::Settings;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    let settings = Settings::new().context("Failed to load settings")?;
    info!("🎓 schoolcore client ready - backend: {}", settings.api.base_url);

    let client = CoreClient::new(settings.clone())?;
    let roster = RosterService::new(RetryableCoreClient::new(settings, None)?);

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("login") => login(&client, &args[1..]).await,
        Some("register-student") => register_student(&roster, &args[1..]).await,
        Some("students") => list_students(&roster, &args[1..]).await,
        Some("student") => show_student(&roster, &args[1..]).await,
        Some("update-student") => update_student(&roster, &args[1..]).await,
        Some("delete-student") => delete_student(&roster, &args[1..]).await,
        Some("teachers") => list_teachers(&roster).await,
        Some("principals") => list_principals(&roster).await,
        _ => {
            print_usage();
            Ok(())
        }
    }
}

async fn login(client: &CoreClient, args: &[String]) -> Result<()> {
    let [email, password, role] = args else {
        anyhow::bail!("usage: login <email> <password> <role>");
    };

    let credentials = LoginCredentials {
        email: email.clone(),
        password: password.clone(),
        role: role.clone(),
    };

    let response = client.login(&credentials).await?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !status.is_success() {
        anyhow::bail!("Login failed: {} - {}", status, body);
    }

    match serde_json::from_str::<LoginReply>(&body) {
        Ok(reply) => {
            println!("Login successful!");
            println!("Access token: {}", reply.access_token);
            println!("User: {} ({})", reply.user.email, reply.user.role);
        }
        Err(_) => println!("{}", body),
    }

    Ok(())
}

async fn register_student(roster: &RosterService, args: &[String]) -> Result<()> {
    let [raw] = args else {
        anyhow::bail!("usage: register-student <json>");
    };

    let data: serde_json::Value =
        serde_json::from_str(raw).context("Registration payload must be valid JSON")?;
    info!(payload = %payload_log_summary(&data), "Registering student");

    let created = roster.register_student(&data).await?;
    println!("{}", serde_json::to_string_pretty(&created)?);

    Ok(())
}

async fn list_students(roster: &RosterService, args: &[String]) -> Result<()> {
    let query = match args {
        [] => None,
        [page] => Some(PageQuery {
            page: Some(page.parse().context("Invalid page number")?),
            page_size: None,
        }),
        [page, size, ..] => Some(PageQuery {
            page: Some(page.parse().context("Invalid page number")?),
            page_size: Some(size.parse().context("Invalid page size")?),
        }),
    };

    let page = roster.list_students(query.as_ref()).await?;

    println!("All students listed!");
    for student in &page.results {
        println!("ID: {} | Name: {}", student.student_id, student.name);
    }
    println!(
        "{} of {} students (page {})",
        page.results.len(),
        page.count,
        page.page
    );

    Ok(())
}

async fn show_student(roster: &RosterService, args: &[String]) -> Result<()> {
    let [id] = args else {
        anyhow::bail!("usage: student <id>");
    };

    let student = roster.student(id.parse().context("Invalid student id")?).await?;
    println!("{}", serde_json::to_string_pretty(&student)?);

    Ok(())
}

async fn update_student(roster: &RosterService, args: &[String]) -> Result<()> {
    let [id, raw] = args else {
        anyhow::bail!("usage: update-student <id> <json>");
    };

    let patch: StudentUpdate =
        serde_json::from_str(raw).context("Update payload must be valid JSON")?;

    let student = roster
        .update_student(id.parse().context("Invalid student id")?, &patch)
        .await?;
    println!("{}", serde_json::to_string_pretty(&student)?);

    Ok(())
}

async fn delete_student(roster: &RosterService, args: &[String]) -> Result<()> {
    let [id] = args else {
        anyhow::bail!("usage: delete-student <id>");
    };

    let student_id: i64 = id.parse().context("Invalid student id")?;
    roster.delete_student(student_id).await?;
    println!("Student {} deleted", student_id);

    Ok(())
}

async fn list_teachers(roster: &RosterService) -> Result<()> {
    let page = roster.list_teachers().await?;

    for teacher in &page.results {
        println!(
            "ID: {} | Name: {} | Subject: {}",
            teacher.faculty_id, teacher.name, teacher.subject
        );
    }
    println!("{} teachers", page.count);

    Ok(())
}

async fn list_principals(roster: &RosterService) -> Result<()> {
    let page = roster.list_principals().await?;

    for principal in &page.results {
        println!("ID: {} | Name: {}", principal.principal_id, principal.name);
    }
    println!("{} principals", page.count);

    Ok(())
}

fn print_usage() {
    println!("{}", schoolcore_client::version_info());
    println!();
    println!("Usage: schoolcore-client <command> [args]");
    println!();
    println!("Commands:");
    println!("  login <email> <password> <role>   Log in against the backend");
    println!("  register-student <json>           Register a student (admin)");
    println!("  students [page [page-size]]       List students");
    println!("  student <id>                      Show one student");
    println!("  update-student <id> <json>        Partially update a student");
    println!("  delete-student <id>               Delete a student");
    println!("  teachers                          List teachers");
    println!("  principals                        List principals");
}
