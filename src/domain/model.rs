use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog entry as served by `GET /api/courses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub spaces_available: u32,
}

/// Snapshot of a course taken when a seat was reserved.
///
/// Serialises exactly like the course it was taken from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItem {
    course: Course,
}

impl CartItem {
    pub fn snapshot(course: &Course) -> Self {
        Self {
            course: course.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.course.id
    }

    pub fn course(&self) -> &Course {
        &self.course
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
}

/// Body of `POST /checkout`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub name: String,
    pub phone: String,
    pub cart: Vec<CartItem>,
}

/// Body returned by `POST /checkout`. The backend sets exactly one field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Body of `POST /api/cart`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSyncRequest {
    pub course_id: String,
    pub title: String,
    pub price: f64,
    pub location: String,
    pub image: String,
}

impl From<&Course> for CartSyncRequest {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.id.clone(),
            title: course.title.clone(),
            price: course.price,
            location: course.location.clone(),
            image: course.image.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSyncResponse {
    pub cart_item_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Title,
    Location,
    Price,
    SpacesAvailable,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortKey::Title),
            "location" => Ok(SortKey::Location),
            "price" => Ok(SortKey::Price),
            "spacesAvailable" | "spaces" => Ok(SortKey::SpacesAvailable),
            other => Err(format!(
                "unknown sort key '{}' (expected title, location, price or spacesAvailable)",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Title => "title",
            SortKey::Location => "location",
            SortKey::Price => "price",
            SortKey::SpacesAvailable => "spacesAvailable",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Index,
    Checkout,
}

impl Page {
    pub fn toggled(self) -> Self {
        match self {
            Page::Index => Page::Checkout,
            Page::Checkout => Page::Index,
        }
    }
}
