//! Day-indexed rehabilitation guidance
//!
//! Maps a day number to one of three static guidance phases and renders the
//! `/status` reply.

use chrono::NaiveDate;

/// Separator placed between guidance entries in a rendered status
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Last day of the acute phase (inclusive)
pub const ACUTE_LAST_DAY: i64 = 14;
/// Last day of the early functional phase (inclusive)
pub const EARLY_FUNCTIONAL_LAST_DAY: i64 = 30;

const ACUTE_CONTENT: &[&str] = &[
    "**Фаза 1: Гостра (1–14 день після операції)**\n",
    "🧠 **Ціль:** зменшити біль, набряк, активувати м'язи",
    "❗ Без опори на прооперовану ногу",
    "\n🦵 **Вправи:**",
    "- Ізометрія квадріцепса",
    "- Піднімання прямої ноги",
    "- Згинання коліна до 30–40°",
    "- Пальцева помпа, відведення ноги, розгинання в стегні",
    "\n💊 **Препарати:**",
    "- Ксарелто 10 мг – до 28.07.2025",
    "- Вітамін D3+K2, Магній",
    "\n📌 **Рекомендації:**",
    "- Носити тутор до 14 дня",
    "- Без навантаження 1.5 міс",
];

const EARLY_FUNCTIONAL_CONTENT: &[&str] = &[
    "**Фаза 2: Рання функціональна (3–6 тиждень)**\n",
    "🧘‍♀️ **Вправи:** Heel Slides, підйом ноги, міст, баланс, гомілкостоп",
    "🧠 **Ціль:** рух до 90°, м’язовий тонус, контроль",
    "\n💊 **Підтримка:**",
    "- Глюкозамін, Колаген II, D3, Mg",
    "\n❗ **Застереження:**",
    "- Без бігу, скручувань, сидіння навпочіпки",
    "- Стоп при болю або нестабільності",
];

const COMPLETED_CONTENT: &[&str] = &[
    "**🎉 Основна фаза завершена!**",
    "Поступово збільшуй навантаження під наглядом спеціаліста",
];

/// Rehabilitation phase keyed by day number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Days up to 14, including every day before surgery
    Acute,
    /// Days 15 through 30
    EarlyFunctional,
    /// Day 31 onward
    Completed,
}

impl Phase {
    pub fn for_day(day: i64) -> Self {
        if day <= ACUTE_LAST_DAY {
            Phase::Acute
        } else if day <= EARLY_FUNCTIONAL_LAST_DAY {
            Phase::EarlyFunctional
        } else {
            Phase::Completed
        }
    }

    pub fn content(self) -> &'static [&'static str] {
        match self {
            Phase::Acute => ACUTE_CONTENT,
            Phase::EarlyFunctional => EARLY_FUNCTIONAL_CONTENT,
            Phase::Completed => COMPLETED_CONTENT,
        }
    }
}

/// Day number relative to the surgery date, 1-indexed (surgery day is 1)
pub fn day_number(surgery_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - surgery_date).num_days() + 1
}

/// Guidance entries for a day number; total over all integers
pub fn get_phase_content(day: i64) -> &'static [&'static str] {
    Phase::for_day(day).content()
}

/// Header line for a status reply
///
/// Non-positive days mean the surgery is still ahead; the header counts down
/// instead of printing a zero or negative ordinal.
pub fn status_header(day: i64) -> String {
    if day >= 1 {
        format!("📅 **Сьогодні {day}-й день після операції**")
    } else {
        let days_left = 1 - day;
        format!("📅 **До операції залишилось днів: {days_left}**")
    }
}

/// Render the full `/status` reply for a day number
pub fn render_status(day: i64) -> String {
    let mut response = status_header(day);
    response.push_str(PARAGRAPH_SEPARATOR);
    response.push_str(&get_phase_content(day).join(PARAGRAPH_SEPARATOR));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(Phase::for_day(i64::MIN), Phase::Acute);
        assert_eq!(Phase::for_day(-3), Phase::Acute);
        assert_eq!(Phase::for_day(0), Phase::Acute);
        assert_eq!(Phase::for_day(1), Phase::Acute);
        assert_eq!(Phase::for_day(14), Phase::Acute);
        assert_eq!(Phase::for_day(15), Phase::EarlyFunctional);
        assert_eq!(Phase::for_day(30), Phase::EarlyFunctional);
        assert_eq!(Phase::for_day(31), Phase::Completed);
        assert_eq!(Phase::for_day(i64::MAX), Phase::Completed);
    }

    #[test]
    fn test_every_day_maps_to_exactly_one_phase() {
        for day in -60..=120 {
            let content = get_phase_content(day);
            let matches = [ACUTE_CONTENT, EARLY_FUNCTIONAL_CONTENT, COMPLETED_CONTENT]
                .iter()
                .filter(|phase| **phase == content)
                .count();
            assert_eq!(matches, 1, "day {day}");

            let expected = match day {
                d if d <= 14 => ACUTE_CONTENT,
                15..=30 => EARLY_FUNCTIONAL_CONTENT,
                _ => COMPLETED_CONTENT,
            };
            assert_eq!(content, expected, "day {day}");
        }
    }

    #[test]
    fn test_acute_content_carries_medication_expiry() {
        assert!(ACUTE_CONTENT.iter().any(|line| line.contains("28.07.2025")));
        assert!(ACUTE_CONTENT.iter().any(|line| line.contains("30–40°")));
    }

    #[test]
    fn test_day_number_is_one_indexed() {
        let surgery = date(2025, 7, 8);
        assert_eq!(day_number(surgery, date(2025, 7, 8)), 1);
        assert_eq!(day_number(surgery, date(2025, 7, 27)), 20);
        assert_eq!(day_number(surgery, date(2025, 7, 7)), 0);
        assert_eq!(day_number(surgery, date(2025, 7, 1)), -6);
        assert_eq!(day_number(surgery, date(2026, 7, 8)), 366);
    }

    #[test]
    fn test_render_status_on_surgery_day() {
        let day = day_number(date(2025, 7, 8), date(2025, 7, 8));
        let status = render_status(day);

        assert!(status.starts_with("📅 **Сьогодні 1-й день після операції**\n\n"));
        assert!(status.ends_with(&ACUTE_CONTENT.join(PARAGRAPH_SEPARATOR)));
    }

    #[test]
    fn test_render_status_later_phases() {
        assert!(render_status(20).contains("Фаза 2"));
        assert!(render_status(20).contains("20-й день"));
        assert!(render_status(45).contains("Основна фаза завершена"));
    }

    #[test]
    fn test_render_status_before_surgery_counts_down() {
        let status = render_status(-2);
        assert!(status.starts_with("📅 **До операції залишилось днів: 3**"));
        assert!(!status.contains("-2-й"));
        assert!(status.contains("Фаза 1"));
    }
}
