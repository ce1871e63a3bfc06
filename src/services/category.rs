use chrono::{Datelike, NaiveDate, Utc};

use crate::entities::enums::{Category, Gender};

/// Display bucket for a model: under 18 → kids, 60 and over → seniors,
/// otherwise the gender bucket. Models without a birth date keep their
/// gender bucket.
pub fn compute_category(date_of_birth: Option<NaiveDate>, gender: Gender) -> Category {
    compute_category_at(date_of_birth, gender, Utc::now().date_naive())
}

/// Same as [`compute_category`] with "today" pinned, so tests don't depend
/// on the wall clock.
pub fn compute_category_at(
    date_of_birth: Option<NaiveDate>,
    gender: Gender,
    today: NaiveDate,
) -> Category {
    let Some(dob) = date_of_birth else {
        return gender.into();
    };

    // Whole years; subtract one if this year's birthday hasn't happened yet.
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }

    if age < 18 {
        Category::Kids
    } else if age >= 60 {
        Category::Seniors
    } else {
        gender.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_birth_date_passes_gender_through() {
        let today = date(2026, 6, 1);
        assert_eq!(
            compute_category_at(None, Gender::Female, today),
            Category::Female
        );
        assert_eq!(compute_category_at(None, Gender::Male, today), Category::Male);
    }

    #[test]
    fn adult_keeps_gender_bucket() {
        let today = date(2026, 6, 1);
        assert_eq!(
            compute_category_at(Some(date(1996, 1, 15)), Gender::Male, today),
            Category::Male
        );
    }

    #[test]
    fn eighteenth_birthday_flips_exactly_at_boundary() {
        let dob = date(2008, 6, 1);
        // Day before the 18th birthday: still kids.
        assert_eq!(
            compute_category_at(Some(dob), Gender::Female, date(2026, 5, 31)),
            Category::Kids
        );
        // On the birthday: adult bucket.
        assert_eq!(
            compute_category_at(Some(dob), Gender::Female, date(2026, 6, 1)),
            Category::Female
        );
    }

    #[test]
    fn sixtieth_birthday_flips_exactly_at_boundary() {
        let dob = date(1966, 6, 1);
        assert_eq!(
            compute_category_at(Some(dob), Gender::Male, date(2026, 5, 31)),
            Category::Male
        );
        assert_eq!(
            compute_category_at(Some(dob), Gender::Male, date(2026, 6, 1)),
            Category::Seniors
        );
    }

    #[test]
    fn birthday_later_in_year_subtracts_one() {
        // Born in December, checked in June: birthday not reached yet.
        let dob = date(2008, 12, 24);
        assert_eq!(
            compute_category_at(Some(dob), Gender::Male, date(2026, 6, 1)),
            Category::Kids
        );
    }
}
