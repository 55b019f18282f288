//! Paging and sorting parameters for list queries.

use crate::{model::pagination::PageDto, server::error::AppError};

/// Page used when the client doesn't ask for one.
pub const DEFAULT_PAGE: u64 = 0;
/// Page size used when the client doesn't ask for one, or asks for zero.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest page size served; bigger requests are clamped.
pub const MAX_PAGE_SIZE: u64 = 2000;

/// Parking spot fields a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    ParkingSpotNumber,
    LicensePlateCar,
    RegistrationDate,
    ResponsibleName,
    Apartment,
    Block,
}

impl SortField {
    /// Resolves the camelCase field name used on the wire.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "parkingSpotNumber" => Some(Self::ParkingSpotNumber),
            "licensePlateCar" => Some(Self::LicensePlateCar),
            "registrationDate" => Some(Self::RegistrationDate),
            "responsibleName" => Some(Self::ResponsibleName),
            "apartment" => Some(Self::Apartment),
            "block" => Some(Self::Block),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Ordering applied to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for Sort {
    /// Newest identifiers first.
    fn default() -> Self {
        Self {
            field: SortField::Id,
            direction: SortDirection::Desc,
        }
    }
}

impl Sort {
    /// Parses `field` or `field,asc|desc`. A bare field sorts ascending.
    ///
    /// # Returns
    /// - `Ok(Sort)` - Parsed ordering
    /// - `Err(AppError::BadRequest)` - Unknown field or direction
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let mut parts = value.splitn(2, ',').map(str::trim);
        let name = parts.next().unwrap_or_default();

        let field = SortField::from_name(name)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown sort field '{}'", name)))?;

        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "Unknown sort direction '{}'",
                    other
                )))
            }
        };

        Ok(Self { field, direction })
    }
}

/// Page selection for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-indexed page number.
    pub page: u64,
    /// Items per page, always within `1..=MAX_PAGE_SIZE`.
    pub size: u64,
    pub sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

impl PageRequest {
    /// Builds a page request from optional query values, applying defaults.
    ///
    /// A size of zero falls back to the default, sizes above `MAX_PAGE_SIZE` are clamped.
    /// A page whose row offset doesn't fit a signed 64-bit SQL offset is rejected.
    pub fn new(page: Option<u64>, size: Option<u64>, sort: Option<&str>) -> Result<Self, AppError> {
        let size = match size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };

        let page = page.unwrap_or(DEFAULT_PAGE);
        match page.checked_mul(size) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => return Err(AppError::BadRequest(format!("Page {} is out of range", page))),
        }

        let sort = match sort {
            Some(value) if !value.trim().is_empty() => Sort::parse(value)?,
            _ => Sort::default(),
        };

        Ok(Self {
            page,
            size,
            sort,
        })
    }
}

/// One page of domain items with paging metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    /// Total number of items across all pages.
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total,
            total_pages: total.div_ceil(request.size),
        }
    }

    /// Converts every item, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

impl<T> From<Page<T>> for PageDto<T> {
    fn from(page: Page<T>) -> Self {
        PageDto {
            content: page.items,
            page: page.page,
            size: page.size,
            total_elements: page.total,
            total_pages: page.total_pages,
        }
    }
}
