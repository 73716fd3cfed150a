//! End-to-end smoke test for the zodiac almanac.
//!
//! Exercises every public query interface through a single `Almanac`
//! and prints a pass/fail report.
//!
//! Run with:
//! ```sh
//! cargo test --test smoke_test -- --nocapture
//! ```

use std::cell::RefCell;

use zodiac_almanac::share::{self, Clipboard, ShareOutcome};
use zodiac_almanac::{Almanac, FortunePeriod, Theme, WallpaperConfig, ZodiacSign};

/// One observed behaviour of an almanac interface.
struct Outcome {
    interface: &'static str,
    behaviour: String,
    ok: bool,
    observed: String,
}

/// Outcomes grouped by the interface that produced them.
#[derive(Default)]
struct Report(Vec<Outcome>);

impl Report {
    fn expect(&mut self, interface: &'static str, behaviour: &str, ok: bool, observed: String) {
        self.0.push(Outcome {
            interface,
            behaviour: behaviour.to_string(),
            ok,
            observed,
        });
    }

    fn broken(&self) -> Vec<&Outcome> {
        self.0.iter().filter(|o| !o.ok).collect()
    }

    /// One line per interface, then the observed value of every outcome.
    fn print(&self) {
        let mut interfaces: Vec<&str> = Vec::new();
        for o in &self.0 {
            if !interfaces.contains(&o.interface) {
                interfaces.push(o.interface);
            }
        }
        for interface in interfaces {
            let outcomes: Vec<_> = self
                .0
                .iter()
                .filter(|o| o.interface == interface)
                .collect();
            let ok = outcomes.iter().filter(|o| o.ok).count();
            eprintln!("{:<14} {}/{}", interface, ok, outcomes.len());
            for o in outcomes {
                let mark = if o.ok { ' ' } else { '!' };
                eprintln!("  {} {:<40} {}", mark, o.behaviour, o.observed);
            }
        }
    }
}

#[derive(Default)]
struct NoteClipboard(RefCell<Vec<String>>);

impl Clipboard for NoteClipboard {
    fn copy(&self, text: &str) -> zodiac_almanac::Result<()> {
        self.0.borrow_mut().push(text.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Main smoke test
// ---------------------------------------------------------------------------

#[test]
fn smoke_test() {
    let tmp = tempfile::tempdir().unwrap();
    let almanac = Almanac::builder().output_dir(tmp.path()).build().unwrap();
    let mut report = Report::default();

    // Signs
    let sign = almanac.signs().by_date(7, 23).unwrap();
    report.expect(
        "signs",
        "07-23 is Leo",
        sign == ZodiacSign::Leo,
        sign.to_string(),
    );

    let info = almanac.signs().get("Leo").unwrap();
    report.expect(
        "signs",
        "lookup by English name",
        info.id == ZodiacSign::Leo,
        format!("{} {}", info.symbol, info.name),
    );
    let count = almanac.signs().all().len();
    report.expect("signs", "twelve signs", count == 12, count.to_string());
    let matches = almanac.signs().compatible_with(sign);
    report.expect(
        "signs",
        "Leo has compatible signs",
        !matches.is_empty(),
        format!("{} listed", matches.len()),
    );

    // Fortunes
    let today = chrono::Local::now().date_naive();
    for period in [FortunePeriod::Daily, FortunePeriod::Weekly, FortunePeriod::Monthly] {
        let fortune = almanac.fortunes().generate_for(sign, period, today);
        report.expect(
            "fortunes",
            &format!("{} fortune is scored", period),
            fortune.overall() <= 100 && !fortune.advice.is_empty(),
            format!("{} overall={}", fortune.date, fortune.overall()),
        );
    }

    let fortune = almanac.fortunes().generate(sign);
    let message = share::fortune_message(info, &fortune, Some("https://zodiac.invalid/fortune"));
    let clipboard = NoteClipboard::default();
    let outcome = share::share_or_copy(None, &clipboard, &message).unwrap();
    report.expect(
        "share",
        "fortune falls back to the clipboard",
        outcome == ShareOutcome::Copied && clipboard.0.borrow().len() == 1,
        message.clipboard_text(),
    );

    // Compatibility
    let result = almanac.compatibility().score(ZodiacSign::Leo, ZodiacSign::Aries);
    report.expect(
        "compatibility",
        "Leo & Aries is scored",
        result.overall <= 100 && !result.bonds.is_empty() && !result.description.is_empty(),
        format!("overall={} relation={}", result.overall, result.relation),
    );

    let aries = almanac.signs().info(ZodiacSign::Aries);
    let message = share::compatibility_message(info, aries, &result, None);
    report.expect(
        "share",
        "match message names both signs",
        message.text.contains("Leo & Aries"),
        message.text.clone(),
    );

    // Sticks
    let mut session = almanac.session();
    let sticks = almanac.sticks();
    let draws = (0..5).filter(|_| session.draw(&sticks).is_ok()).count();
    report.expect(
        "sticks",
        "three draws per day",
        draws == 3 && session.remaining() == 0,
        format!("{} of 5 attempts drew", draws),
    );

    if let Some(record) = session.latest() {
        let message = share::stick_message(&record.stick);
        report.expect(
            "share",
            "stick message has no url",
            message.url.is_none() && message.text.contains(&record.stick.title),
            record.stick.title.clone(),
        );
    }

    // Wallpaper
    let config = WallpaperConfig::new(sign).theme(Theme::Scroll).caption("Shine on");
    let path = almanac.save_wallpaper(&config).unwrap();
    let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    report.expect(
        "wallpaper",
        "PNG saved into the output dir",
        path.starts_with(tmp.path()) && size > 0,
        format!("{} ({} bytes)", path.display(), size),
    );

    let display = almanac.to_string();
    report.expect(
        "almanac",
        "Display names the data source",
        display.contains("Almanac"),
        display.clone(),
    );

    report.print();
    let broken = report.broken();
    assert!(
        broken.is_empty(),
        "{} behaviours broken: {:?}",
        broken.len(),
        broken.iter().map(|o| &o.behaviour).collect::<Vec<_>>()
    );
}
