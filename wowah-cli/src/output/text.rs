//! Text output formatting with colors.

use chrono::Local;
use wowah_core::{
    AccessToken, Auction, ConnectedRealm, ItemClass, ItemClassSummary, ItemRecord,
    ItemSearchPage, Money,
};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Width of the item name column in auction tables.
const NAME_WIDTH: usize = 32;

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats an access token and its expiry.
    pub fn format_token(&self, token: &AccessToken, reveal: bool) -> String {
        let secret = if reveal {
            token.secret().to_string()
        } else {
            token.masked()
        };
        let expires = token.expires_at().with_timezone(&Local);
        format!(
            "{}    {}\n{}  {}",
            self.bold("Token:"),
            self.cyan(&secret),
            self.bold("Expires:"),
            expires.format("%Y-%m-%d %H:%M:%S %Z")
        )
    }

    /// Formats a list of connected realm ids.
    pub fn format_realm_ids(&self, ids: &[u32]) -> String {
        let mut lines = vec![self.bold(&format!("{} connected realms", ids.len()))];
        for chunk in ids.chunks(10) {
            let row: Vec<String> = chunk.iter().map(|id| format!("{id:>5}")).collect();
            lines.push(row.join(" "));
        }
        lines.join("\n")
    }

    /// Formats a connected realm.
    pub fn format_realm(&self, realm: &ConnectedRealm, locale: &str) -> String {
        let mut lines = vec![self.bold(&format!("Connected realm {}", realm.id))];

        if let Some(status) = &realm.status {
            let text = if status.kind == "UP" {
                self.green(&status.kind)
            } else {
                self.red(&status.kind)
            };
            lines.push(format!("Status:     {text}"));
        }
        if let Some(population) = &realm.population {
            lines.push(format!("Population: {}", population.kind));
        }
        if realm.has_queue {
            lines.push(format!("Queue:      {}", self.yellow("yes")));
        }

        let names = realm.realm_names(locale);
        if !names.is_empty() {
            lines.push(format!("Realms:     {}", names.join(", ")));
        }
        lines.join("\n")
    }

    /// Header line of an auction table.
    pub fn format_auctions_header(&self) -> String {
        self.bold(&format!(
            "{:>8}  {:<NAME_WIDTH$}  {:>5}  {:>16}  {:>16}  {:>8}",
            "Item", "Name", "Qty", "Unit price", "Buyout", "Left"
        ))
    }

    /// One auction table row.
    pub fn format_auction_line(&self, auction: &Auction, name: Option<&str>) -> String {
        let name = truncate(name.unwrap_or("-"), NAME_WIDTH);
        let unit = auction
            .price_per_unit()
            .map_or_else(|| "-".to_string(), |m| m.to_string());
        let buyout = auction
            .buyout
            .map_or_else(|| "-".to_string(), |m| m.to_string());

        format!(
            "{:>8}  {:<NAME_WIDTH$}  {:>5}  {}  {}  {:>8}",
            auction.item.id,
            name,
            auction.quantity,
            self.money_cell(&unit),
            self.money_cell(&buyout),
            self.dim(auction.time_left.label())
        )
    }

    /// Formats enrichment results.
    pub fn format_records(&self, records: &[ItemRecord]) -> String {
        records
            .iter()
            .map(|record| {
                let class = record
                    .classid
                    .map_or_else(|| "-".to_string(), |c| c.to_string());
                let name = if record.is_resolved() {
                    record.name.clone()
                } else {
                    self.red(&record.name)
                };
                format!("{:>8}  {:>5}  {}", record.id, self.dim(&class), name)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Formats a page of search hits.
    pub fn format_search_page(&self, page: &ItemSearchPage) -> String {
        let mut lines: Vec<String> = page
            .items
            .iter()
            .map(|hit| format!("{:>8}  {}", hit.id, hit.name))
            .collect();

        if lines.is_empty() {
            lines.push(self.dim("No items found"));
        }
        lines.push(self.dim(&format!("Page {} of {}", page.page, page.page_count)));
        lines.join("\n")
    }

    /// Formats the item class index.
    pub fn format_classes(&self, classes: &[ItemClassSummary]) -> String {
        classes
            .iter()
            .map(|class| format!("{:>3}  {}", class.id, class.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Formats an item class and its subclasses.
    pub fn format_class(&self, class: &ItemClass, locale: &str) -> String {
        let mut lines = vec![self.bold(&format!(
            "{} ({})",
            class.name.resolve_or_unknown(locale),
            class.class_id
        ))];
        for subclass in &class.item_subclasses {
            lines.push(format!(
                "  {:>3}  {}",
                subclass.id,
                subclass.name.resolve_or_unknown(locale)
            ));
        }
        lines.join("\n")
    }

    /// Formats a copper amount.
    pub fn format_money(&self, money: Money) -> String {
        self.yellow(&money.to_string())
    }

    fn money_cell(&self, text: &str) -> String {
        let padded = format!("{text:>16}");
        if text == "-" {
            padded
        } else {
            self.yellow(&padded)
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Cuts `text` to at most `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
