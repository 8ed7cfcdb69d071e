use chrono::NaiveDate;
use std::fmt::Write;

use dealvault_core::models::deal::Deal;
use dealvault_core::models::stats::{CategoryStats, Dashboard, PlatformStats};

pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

pub fn dashboard(view: &Dashboard) -> String {
    let s = &view.stats;
    let mut out = String::new();
    let _ = writeln!(out, "Lifetime spend : {}", money(s.total_spent));
    let _ = writeln!(
        out,
        "Total saved    : {} ({}% saved)",
        money(s.total_saved),
        s.savings_percentage
    );
    let _ = writeln!(out, "Active deals   : {} of {} total", s.active_deals, s.total_deals);
    let _ = writeln!(out, "Avg deal value : ${}", s.average_deal_value.round());
    let _ = writeln!(
        out,
        "Refund rate    : {}",
        s.refund_rate
            .map(|r| format!("{r:.1}%"))
            .unwrap_or_else(|| "not tracked".to_string())
    );
    let _ = writeln!(out, "Unused LTDs    : {}", s.unused_ltds);
    let _ = writeln!(out, "Failed LTDs    : {}", s.failed_ltds);

    out.push_str("\nRecent deals\n");
    if view.recent_deals.is_empty() {
        out.push_str("  (none yet)\n");
    }
    for deal in &view.recent_deals {
        let _ = writeln!(out, "  {}", deal_line(deal));
    }
    out
}

pub fn deal_line(deal: &Deal) -> String {
    format!(
        "[{}] {} — {} on {} ({}), paid {} vs {} ({}% off), {}",
        deal.id,
        deal.product_name,
        deal.category,
        deal.platform,
        deal.status,
        money(deal.purchase_price),
        money(deal.regular_price),
        deal.savings_percentage(),
        deal.purchase_date,
    )
}

pub fn deal_list(deals: &[Deal]) -> String {
    if deals.is_empty() {
        return "No deals match.\n".to_string();
    }
    let mut out = String::new();
    for deal in deals {
        let _ = writeln!(out, "{}", deal_line(deal));
    }
    let _ = writeln!(out, "{} deal(s)", deals.len());
    out
}

pub fn categories(stats: &[CategoryStats]) -> String {
    let mut out = String::new();
    for c in stats {
        let _ = writeln!(
            out,
            "{:<14} {:>3} deals  {:>3} active  spent {:>10}  saved {:>10}  avg {:>9}",
            c.name,
            c.deal_count,
            c.active_deals,
            money(c.total_spent),
            money(c.total_saved),
            money(c.average_deal_value),
        );
    }
    out
}

pub fn platforms(stats: &[PlatformStats]) -> String {
    let mut out = String::new();
    for p in stats {
        let _ = writeln!(
            out,
            "{:<14} {:>3} deals  spent {:>10}  saved {:>10}",
            p.name,
            p.deal_count,
            money(p.total_spent),
            money(p.total_saved),
        );
    }
    out
}

pub fn dates(dates: &[NaiveDate]) -> String {
    let mut out = String::new();
    for d in dates {
        let _ = writeln!(out, "{d}");
    }
    out
}
