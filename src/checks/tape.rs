//! Tape (media) checks

use crate::catalog::CatalogQuery;
use crate::checks::Check;

/// Volumes in the changer that can be written again
pub fn empty_tapes() -> Check {
    Check::new(CatalogQuery::EmptyTapes, "bareos.tape.empty", |n, _| {
        format!("{n} Tapes are empty")
    })
}

/// Volumes loaded in a changer slot
pub fn tapes_in_storage() -> Check {
    Check::new(CatalogQuery::TapesInStorage, "bareos.tape.instorage", |n, _| {
        format!("{n} Tapes are in the Storage")
    })
}

/// Volumes whose retention has elapsed
pub fn expired_tapes() -> Check {
    Check::new(CatalogQuery::ExpiredTapes, "bareos.tape.expired", |n, _| {
        format!("{n} Tapes are expired")
    })
}

/// Volumes whose retention elapses within `days`
pub fn expiring_tapes(days: u32) -> Check {
    Check::new(
        CatalogQuery::ExpiringTapes { days },
        "bareos.tape.willexpire",
        move |n, _| format!("{n} Tapes will expire in {days} days"),
    )
}

/// Volumes that should be replaced soon
pub fn replace_tapes(mounts: u32) -> Check {
    Check::new(
        CatalogQuery::ReplaceTapes { mounts },
        "bareos.tape.replace",
        |n, _| format!("{n} Tapes might need replacement"),
    )
}
