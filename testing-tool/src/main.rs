use anyhow::Result;
use colored::*;
use std::io::{self, Write};
use uuid::Uuid;

use petrol_finder_client::dto::station_dto::NearbyStationsQuery;
use petrol_finder_client::{PetrolFinderApi, DEFAULT_LOCATION};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    println!("{}", "⛽ Petrol Finder Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let api = PetrolFinderApi::from_env()?;

    // Paso 1: Pedir credenciales y abrir sesión
    println!("{}", "🔐 CREDENCIALES".bright_cyan().bold());
    println!("{}", "================".bright_cyan());
    let username = prompt("Username: ")?;
    let password = prompt("Password: ")?;

    match api.login(&username, &password).await {
        Ok(_) => println!("{}", "✅ Sesión iniciada".bright_green()),
        Err(e) => {
            println!("{}", format!("❌ Login fallido: {}", e).bright_red());
            println!("{}", "Continuando sin sesión (solo endpoints públicos)".bright_yellow());
        }
    }

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🗺️ Buscar estaciones cercanas");
        println!("2. 📋 Detalle de una estación");
        println!("3. ⛽ Listar tipos de combustible");
        println!("4. 💰 Últimos precios de una estación");
        println!("5. ⭐ Mis estaciones favoritas");
        println!("6. 📊 Resumen del dashboard");
        println!("7. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-7): ")?;

        let outcome = match choice.as_str() {
            "1" => show_nearby_stations(&api).await,
            "2" => show_station_details(&api).await,
            "3" => show_fuel_types(&api).await,
            "4" => show_latest_prices(&api).await,
            "5" => show_favorites(&api).await,
            "6" => show_dashboard(&api).await,
            "7" => {
                api.logout().await;
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("{}", format!("❌ Error: {}", e).bright_red());
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

async fn show_nearby_stations(api: &PetrolFinderApi) -> Result<()> {
    println!();
    println!("{}", "🗺️ BÚSQUEDA DE ESTACIONES".bright_cyan().bold());
    println!("{}", "==========================".bright_cyan());

    let lat_input = prompt("Latitud (vacío = punto por defecto): ")?;
    let query = if lat_input.is_empty() {
        NearbyStationsQuery::at(DEFAULT_LOCATION.latitude, DEFAULT_LOCATION.longitude)
    } else {
        let lng_input = prompt("Longitud: ")?;
        NearbyStationsQuery::at(lat_input.parse()?, lng_input.parse()?)
    };

    let stations = api.nearby_stations(&query).await?;
    println!(
        "{}",
        format!("📍 {} estaciones encontradas", stations.len()).bright_green().bold()
    );
    for station in &stations {
        let distance = station
            .distance
            .map(|d| format!("{:.1} km", d))
            .unwrap_or_else(|| "?".to_string());
        let rating = station
            .average_rating
            .map(|r| format!("{:.1}⭐", r))
            .unwrap_or_else(|| "sin rating".to_string());
        println!("  {} | {} | {} | {}", station.id, station.name, distance, rating);
    }
    Ok(())
}

async fn show_station_details(api: &PetrolFinderApi) -> Result<()> {
    let id: Uuid = prompt("UUID de la estación: ")?.parse()?;
    let detail = api.station_details(id).await?;

    println!("{}", "📋 DETALLE:".bright_green().bold());
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}

async fn show_fuel_types(api: &PetrolFinderApi) -> Result<()> {
    let types = api.fuel_types().await?;
    println!("{}", "⛽ TIPOS DE COMBUSTIBLE:".bright_green().bold());
    for fuel_type in &types {
        println!("  {} - {}", fuel_type.id, fuel_type.name);
    }
    Ok(())
}

async fn show_latest_prices(api: &PetrolFinderApi) -> Result<()> {
    let id: Uuid = prompt("UUID de la estación: ")?.parse()?;
    let prices = api.latest_prices_by_station(id).await?;

    println!("{}", "💰 ÚLTIMOS PRECIOS:".bright_green().bold());
    for price in &prices {
        let verified = if price.is_verified { "✅" } else { "⚠️" };
        println!(
            "  {} {} = {:.2} ({})",
            verified, price.fuel_type_name, price.price, price.reported_at
        );
    }
    Ok(())
}

async fn show_favorites(api: &PetrolFinderApi) -> Result<()> {
    let favorites = api.user_favorites().await?;
    println!(
        "{}",
        format!("⭐ {} FAVORITAS:", favorites.len()).bright_green().bold()
    );
    for favorite in &favorites {
        println!(
            "  {} ({}, {})",
            favorite.station_detail.name, favorite.station_detail.city, favorite.created_at
        );
    }
    Ok(())
}

async fn show_dashboard(api: &PetrolFinderApi) -> Result<()> {
    let summary = api.dashboard_summary().await?;

    println!("{}", "📊 RESUMEN:".bright_green().bold());
    println!("  🚗 Vehículos: {}", summary.vehicles_count);
    println!("  ⭐ Favoritas: {}", summary.favorites_count);
    println!("  🔔 Alertas activas: {}", summary.active_alerts);
    println!("  📬 Notificaciones sin leer: {}", summary.unread_notifications);
    println!("  💸 Gasto del mes: {:.2}", summary.month_spending);
    Ok(())
}
