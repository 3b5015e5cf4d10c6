use anyhow::{bail, Result};
use colored::*;
use reqwest::Client;
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚚 Parcel Dispatch Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    println!("{} {}", "🌐 API:".bright_blue(), base_url);

    let client = Client::new();

    // Paso 1: Pedir credenciales
    let credentials = get_credentials()?;

    // Paso 2: Autenticarse y obtener token + compañía
    let session = authenticate(&client, &base_url, &credentials).await?;

    // Paso 3: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📦 Crear booking de prueba");
        println!("2. 🔍 Listar bookings de la compañía");
        println!("3. 📊 Resumen del dashboard");
        println!("4. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-4): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;

        match choice.trim() {
            "1" => {
                if let Err(e) = test_create_booking(&client, &base_url, &session).await {
                    println!("{} {}", "❌ Error:".bright_red(), e);
                }
            }
            "2" => {
                if let Err(e) = test_list_bookings(&client, &base_url, &session).await {
                    println!("{} {}", "❌ Error:".bright_red(), e);
                }
            }
            "3" => {
                if let Err(e) = test_dashboard(&client, &base_url, &session).await {
                    println!("{} {}", "❌ Error:".bright_red(), e);
                }
            }
            "4" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

#[derive(Debug)]
struct Credentials {
    email: String,
    password: String,
}

struct Session {
    token: String,
    company_id: String,
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", format!("{}: ", label).bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn get_credentials() -> Result<Credentials> {
    println!();
    println!("{}", "🔐 CREDENCIALES DE LA COMPAÑÍA".bright_cyan().bold());
    println!("{}", "===============================".bright_cyan());

    let email = prompt("Email")?;
    let password = prompt("Password")?;

    Ok(Credentials { email, password })
}

async fn authenticate(client: &Client, base_url: &str, credentials: &Credentials) -> Result<Session> {
    println!();
    println!("{}", "🔐 AUTENTICANDO...".bright_cyan().bold());
    println!("{}", "===================".bright_cyan());

    let payload = json!({
        "email": credentials.email,
        "password": credentials.password
    });

    let response = client
        .post(format!("{}/api/company/login", base_url))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;

    if status == reqwest::StatusCode::UNAUTHORIZED {
        println!("{}", "⚠️ Login rechazado. ¿La compañía existe?".bright_yellow());
        let answer = prompt("¿Registrarla ahora? (s/n)")?;
        if answer.eq_ignore_ascii_case("s") {
            register_company(client, base_url, credentials).await?;
            return Box::pin(authenticate(client, base_url, credentials)).await;
        }
        bail!("login rechazado: {}", body["message"]);
    }

    if !status.is_success() {
        print_response(&status, &body);
        bail!("login falló con status {}", status);
    }

    let token = match body["data"]["token"].as_str() {
        Some(t) => t.to_string(),
        None => bail!("la respuesta de login no trae token"),
    };
    let company_id = match body["data"]["company"]["id"].as_str() {
        Some(id) => id.to_string(),
        None => bail!("la respuesta de login no trae la compañía"),
    };

    println!("{}", "✅ TOKEN EXTRAÍDO:".bright_green().bold());
    println!("{}", token);
    println!(
        "{} {}",
        "🏢 Compañía:".bright_green(),
        body["data"]["company"]["name"]
    );

    Ok(Session { token, company_id })
}

async fn register_company(client: &Client, base_url: &str, credentials: &Credentials) -> Result<()> {
    println!();
    println!("{}", "🏢 REGISTRANDO COMPAÑÍA DE PRUEBA...".bright_cyan().bold());
    println!("{}", "=====================================".bright_cyan());

    let name = prompt("Nombre de la compañía")?;
    let contact_person = prompt("Persona de contacto")?;

    let payload = json!({
        "name": name,
        "address": "Dirección de prueba 123",
        "contact_person": contact_person,
        "contact_email": credentials.email,
        "password": credentials.password
    });

    let response = client
        .post(format!("{}/api/company/register", base_url))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;
    print_response(&status, &body);

    if !status.is_success() {
        bail!("el registro falló con status {}", status);
    }
    Ok(())
}

async fn test_create_booking(client: &Client, base_url: &str, session: &Session) -> Result<()> {
    println!();
    println!("{}", "📦 CREANDO BOOKING DE PRUEBA...".bright_cyan().bold());
    println!("{}", "=================================".bright_cyan());

    let consignee_name = prompt("Consignatario")?;
    let destination = prompt("Destino")?;
    let article_count: i64 = prompt("Cantidad de artículos")?.parse()?;

    let payload = json!({
        "company_id": session.company_id,
        "consignee_name": consignee_name,
        "destination": destination,
        "article_count": article_count
    });

    println!("{}", "📤 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);
    println!();

    let response = client
        .post(format!("{}/api/bookings", base_url))
        .bearer_auth(&session.token)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;
    print_response(&status, &body);

    if let Some(lr) = body["data"]["lr_number"].as_str() {
        println!(
            "{} {} → {}",
            "🏷️ LR:".bright_green().bold(),
            lr,
            body["data"]["grand_total"]
        );
    }
    Ok(())
}

async fn test_list_bookings(client: &Client, base_url: &str, session: &Session) -> Result<()> {
    println!();
    println!("{}", "🔍 LISTANDO BOOKINGS...".bright_cyan().bold());
    println!("{}", "========================".bright_cyan());

    let response = client
        .get(format!(
            "{}/api/bookings?company_id={}&limit=10",
            base_url, session.company_id
        ))
        .bearer_auth(&session.token)
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;
    print_response(&status, &body);

    if let Some(bookings) = body["data"].as_array() {
        println!(
            "{}",
            format!("📦 BOOKINGS ENCONTRADOS: {} elementos", bookings.len())
                .bright_green()
                .bold()
        );
        for booking in bookings {
            println!(
                "   {} [{}] {} → {}",
                booking["lr_number"], booking["status"], booking["consignee_name"],
                booking["destination"]
            );
        }
    }
    Ok(())
}

async fn test_dashboard(client: &Client, base_url: &str, session: &Session) -> Result<()> {
    println!();
    println!("{}", "📊 RESUMEN DEL DASHBOARD...".bright_cyan().bold());
    println!("{}", "============================".bright_cyan());

    let response = client
        .get(format!("{}/api/dashboard/summary", base_url))
        .bearer_auth(&session.token)
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;
    print_response(&status, &body);
    Ok(())
}

fn print_response(status: &reqwest::StatusCode, body: &Value) {
    println!("{}", "📥 RESPUESTA:".bright_green().bold());
    println!("{}", "=============".bright_green());
    println!("{} {}", "Status:".bright_blue(), status);
    println!(
        "{}",
        serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
    );
    println!();
}
