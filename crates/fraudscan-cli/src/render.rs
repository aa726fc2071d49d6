//! Terminal rendering of the dashboard view.

use chrono::Local;
use colored::Colorize;
use fraudscan_core::ViewProjection;
use fraudscan_core::analysis::{AnalysisResult, AreaPrices, DerivedScores, RiskTier};
use fraudscan_core::error::TransportError;
use fraudscan_core::history::HistoryEntry;
use fraudscan_core::session::SessionState;

/// Characters of a title shown in the history list.
pub const TITLE_PREVIEW_CHARS: usize = 15;
const BAR_WIDTH: usize = 20;

pub fn truncate_title(title: &str) -> String {
    let mut chars = title.chars();
    let preview: String = chars.by_ref().take(TITLE_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}

pub fn format_euros(amount: f64) -> String {
    format!("{amount:.0} €")
}

/// Per-square-meter figures, or `n/a` when the area is unusable.
pub fn format_area_prices(prices: Option<&AreaPrices>) -> (String, String) {
    match prices {
        Some(p) => (
            format!("{:.0} €/m²", p.price_per_area),
            format!("{:.0} €/m²", p.estimate_per_area),
        ),
        None => ("n/a".to_string(), "n/a".to_string()),
    }
}

pub fn score_bar(value: f64) -> String {
    let filled = (value.clamp(0.0, 100.0) * BAR_WIDTH as f64 / 100.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn print_banner() {
    println!("{}", "=== FraudScan ===".bright_magenta().bold());
    println!(
        "{}",
        "Paste a sale listing URL to scan it, 'help' for commands, 'quit' to exit.".bright_black()
    );
    println!();
}

pub fn print_help() {
    let rows = [
        ("<url> | scan <url>", "scan a listing"),
        ("history", "list recent scans"),
        ("open <n>", "show scan n from history"),
        ("delete <n>", "remove scan n from history"),
        ("image <n>", "enlarge image n of the current listing"),
        ("close", "close the enlarged image"),
        ("retry", "repeat the last failed scan"),
        ("new", "clear the dashboard"),
        ("show", "redraw the dashboard"),
        ("quit", "exit"),
    ];
    for (command, description) in rows {
        println!("  {:<20} {}", command.bright_cyan(), description.bright_black());
    }
}

/// Draws whatever the session currently shows.
pub fn print_view(view: &ViewProjection) {
    match &view.session {
        SessionState::Idle => {
            println!("{}", "Nothing scanned yet.".bright_black());
            if let Some(url) = &view.retry_url {
                println!(
                    "{}",
                    format!("Last scan of {url} failed. Type 'retry' to try again.").yellow()
                );
            }
        }
        SessionState::Loading { url } => {
            println!("{}", format!("Scanning {url}...").bright_black());
        }
        SessionState::Result { result, source_url } => print_result(view, result, source_url),
        SessionState::Error(rejection) => {
            println!("{}", "⛔ Listing rejected".red().bold());
            println!("{}", rejection.message.red());
            println!("{}", "Type 'new' to start over.".bright_black());
        }
    }
}

fn print_result(view: &ViewProjection, result: &AnalysisResult, source_url: &str) {
    let details = &result.details;

    println!("{}", source_url.bright_black());
    println!("{}", details.title.bold());
    println!();

    let verdict = format!("VERDICT: {}", result.message);
    if result.is_fraud {
        println!("{}", verdict.red().bold());
    } else {
        println!("{}", verdict.green().bold());
    }
    println!("Risk: {}%", result.confidence);
    println!();

    if let Some(scores) = &view.derived_scores {
        print_scores(scores, result.is_fraud);
    }

    let (asked, estimated) = format_area_prices(view.area_prices.as_ref());
    println!("{}", "Market price".bold());
    println!("  Asking    {:>12}  {}", format_euros(details.price), asked.bright_black());
    println!(
        "  Estimate  {:>12}  {}",
        format_euros(result.ai_estimated_price).bright_blue(),
        estimated.bright_black()
    );
    println!();

    if let Some(tier) = view.risk_tier {
        print_advice(tier);
    }

    println!("{}", "Property & seller".bold());
    println!("  Surface   {} m²", details.surface_area);
    println!("  Rooms     {}", details.rooms);
    println!(
        "  Seller    {} days old, {} active posts",
        details.seller_age_days, details.seller_active_posts
    );
    println!();

    print_gallery(result.images(), view.active_image.as_deref());
}

fn print_scores(scores: &DerivedScores, is_fraud: bool) {
    println!("{}", "Score breakdown".bold());
    println!(
        "  Price validity  {} {:>6}",
        score_bar(f64::from(scores.price_score)).blue(),
        scores.price_score
    );
    println!(
        "  Seller trust    {} {:>6}",
        score_bar(f64::from(scores.seller_score)).purple(),
        scores.seller_score
    );
    let overall = score_bar(scores.trust_score);
    let overall = if is_fraud { overall.red() } else { overall.green() };
    println!("  Overall         {} {:>6.2}", overall, scores.trust_score);
    println!();
}

fn print_advice(tier: RiskTier) {
    println!("{}", "Recommendations".bold());
    for tip in tier.advice() {
        match tier {
            RiskTier::High => println!("  {} {}", "!".red(), tip),
            RiskTier::Low => println!("  {} {}", "✓".green(), tip),
        }
    }
    println!();
}

fn print_gallery(images: &[String], active: Option<&str>) {
    if images.is_empty() {
        println!("{}", "No images.".bright_black());
        return;
    }
    println!("{}", "Images".bold());
    for (i, image) in images.iter().enumerate() {
        if Some(image.as_str()) == active {
            println!("  {} {}", format!("[{}]", i + 1).bright_cyan().bold(), image.bright_white());
        } else {
            println!("   {}  {}", i + 1, image.bright_black());
        }
    }
}

pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("{}", "No recent scans.".bright_black());
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        let dot = if entry.is_fraud { "●".red() } else { "●".green() };
        let when = entry.scanned_at.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        println!(
            "{:>3}. {} {:<18} {}",
            i + 1,
            dot,
            truncate_title(&entry.title),
            when.to_string().bright_black()
        );
    }
}

pub fn print_transport_error(error: &TransportError, can_retry: bool) {
    eprintln!("{}", format!("✖ {}", error.user_message()).red().bold());
    if can_retry {
        eprintln!("{}", "Type 'retry' to try again.".bright_black());
    }
}

pub fn print_notice(message: &str) {
    println!("{}", message.yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("Short flat"), "Short flat");
        assert_eq!(truncate_title("Apartament 3 camere Floreasca"), "Apartament 3 ca...");
        assert_eq!(truncate_title("ăîșțâăîșțâăîșțâ"), "ăîșțâăîșțâăîșțâ");
        assert_eq!(truncate_title("ăîșțâăîșțâăîșțâx"), "ăîșțâăîșțâăîșțâ...");
    }

    #[test]
    fn test_area_prices_fall_back_to_na() {
        let (asked, estimated) = format_area_prices(None);
        assert_eq!(asked, "n/a");
        assert_eq!(estimated, "n/a");

        let prices = AreaPrices {
            price_per_area: 1111.4,
            estimate_per_area: 2777.8,
        };
        assert_eq!(
            format_area_prices(Some(&prices)),
            ("1111 €/m²".to_string(), "2778 €/m²".to_string())
        );
    }

    #[test]
    fn test_score_bar_width() {
        assert_eq!(score_bar(0.0), "░".repeat(BAR_WIDTH));
        assert_eq!(score_bar(100.0), "█".repeat(BAR_WIDTH));
        assert_eq!(score_bar(30.0).chars().filter(|c| *c == '█').count(), 6);
        assert_eq!(score_bar(98.0).chars().count(), BAR_WIDTH);
        assert_eq!(score_bar(12.65).chars().filter(|c| *c == '█').count(), 3);
        assert_eq!(score_bar(f64::NAN).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_format_euros_rounds() {
        assert_eq!(format_euros(60_000.4), "60000 €");
    }
}
