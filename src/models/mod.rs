use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Section of the add-property form a field is rendered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormSection {
    PropertyDetails,
    ListingDetails,
    FileUpload,
    Amenities,
    LocationDetails,
}

impl FormSection {
    /// Sections in the order they appear on the page
    pub const ALL: [FormSection; 5] = [
        FormSection::PropertyDetails,
        FormSection::ListingDetails,
        FormSection::FileUpload,
        FormSection::Amenities,
        FormSection::LocationDetails,
    ];

    /// Scalar fields rendered by this section. File upload and amenities own none.
    pub fn fields(self) -> Vec<ScalarField> {
        ScalarField::ALL
            .into_iter()
            .filter(|field| field.section() == self)
            .collect()
    }
}

/// Scalar (text) fields of the listing form, in required-field order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    PropertyTitle,
    Description,
    CategorySelection,
    Price,
    Area,
    Bedrooms,
    Bathrooms,
    Kitchens,
    Garages,
    GarageArea,
    YearBuilt,
    Flours,
    Address,
    Country,
    City,
    ZipCode,
    District,
    MapLocation,
}

impl ScalarField {
    /// Every scalar field; validation walks this list front to back
    pub const ALL: [ScalarField; 18] = [
        ScalarField::PropertyTitle,
        ScalarField::Description,
        ScalarField::CategorySelection,
        ScalarField::Price,
        ScalarField::Area,
        ScalarField::Bedrooms,
        ScalarField::Bathrooms,
        ScalarField::Kitchens,
        ScalarField::Garages,
        ScalarField::GarageArea,
        ScalarField::YearBuilt,
        ScalarField::Flours,
        ScalarField::Address,
        ScalarField::Country,
        ScalarField::City,
        ScalarField::ZipCode,
        ScalarField::District,
        ScalarField::MapLocation,
    ];

    /// Control identifier, also the JSON key in the submitted payload
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarField::PropertyTitle => "propertyTitle",
            ScalarField::Description => "description",
            ScalarField::CategorySelection => "categorySelection",
            ScalarField::Price => "price",
            ScalarField::Area => "area",
            ScalarField::Bedrooms => "bedrooms",
            ScalarField::Bathrooms => "bathrooms",
            ScalarField::Kitchens => "kitchens",
            ScalarField::Garages => "garages",
            ScalarField::GarageArea => "garageArea",
            ScalarField::YearBuilt => "yearBuilt",
            ScalarField::Flours => "flours",
            ScalarField::Address => "address",
            ScalarField::Country => "country",
            ScalarField::City => "city",
            ScalarField::ZipCode => "zipCode",
            ScalarField::District => "district",
            ScalarField::MapLocation => "mapLocation",
        }
    }

    pub fn section(self) -> FormSection {
        match self {
            ScalarField::PropertyTitle
            | ScalarField::Description
            | ScalarField::CategorySelection => FormSection::PropertyDetails,
            ScalarField::Price
            | ScalarField::Area
            | ScalarField::Bedrooms
            | ScalarField::Bathrooms
            | ScalarField::Kitchens
            | ScalarField::Garages
            | ScalarField::GarageArea
            | ScalarField::YearBuilt
            | ScalarField::Flours => FormSection::ListingDetails,
            ScalarField::Address
            | ScalarField::Country
            | ScalarField::City
            | ScalarField::ZipCode
            | ScalarField::District
            | ScalarField::MapLocation => FormSection::LocationDetails,
        }
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}

/// Key of the amenities map in the serialized snapshot
pub const AMENITIES_KEY: &str = "amenities";

/// Keys the snapshot always writes itself; extras never shadow them
pub fn is_reserved_key(key: &str) -> bool {
    key == AMENITIES_KEY || key.parse::<ScalarField>().is_ok()
}

/// Snapshot of the add-property form
///
/// Numeric-looking fields stay text until the server sees them.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSnapshot {
    pub property_title: String,
    pub description: String,
    pub category_selection: String,
    pub price: String,
    pub area: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub kitchens: String,
    pub garages: String,
    pub garage_area: String,
    pub year_built: String,
    pub flours: String,
    pub address: String,
    pub country: String,
    pub city: String,
    pub zip_code: String,
    pub district: String,
    pub map_location: String,
    /// Only amenities the user has toggled are present
    pub amenities: BTreeMap<String, bool>,
    /// Scalars edited under an identifier the form does not know about
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self {
            property_title: String::new(),
            description: String::new(),
            category_selection: String::new(),
            price: String::new(),
            area: String::new(),
            bedrooms: "0".to_string(),
            bathrooms: "0".to_string(),
            kitchens: "0".to_string(),
            garages: "0".to_string(),
            garage_area: String::new(),
            year_built: String::new(),
            flours: "0".to_string(),
            address: String::new(),
            country: String::new(),
            city: String::new(),
            zip_code: String::new(),
            district: String::new(),
            map_location: String::new(),
            amenities: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extras: Vec<_> = self
            .extra
            .iter()
            .filter(|(key, _)| !is_reserved_key(key))
            .collect();

        let mut map = serializer.serialize_map(Some(ScalarField::ALL.len() + 1 + extras.len()))?;
        for field in ScalarField::ALL {
            map.serialize_entry(field.as_str(), self.get(field))?;
        }
        map.serialize_entry(AMENITIES_KEY, &self.amenities)?;
        for (key, value) in extras {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl FormSnapshot {
    pub fn get(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::PropertyTitle => &self.property_title,
            ScalarField::Description => &self.description,
            ScalarField::CategorySelection => &self.category_selection,
            ScalarField::Price => &self.price,
            ScalarField::Area => &self.area,
            ScalarField::Bedrooms => &self.bedrooms,
            ScalarField::Bathrooms => &self.bathrooms,
            ScalarField::Kitchens => &self.kitchens,
            ScalarField::Garages => &self.garages,
            ScalarField::GarageArea => &self.garage_area,
            ScalarField::YearBuilt => &self.year_built,
            ScalarField::Flours => &self.flours,
            ScalarField::Address => &self.address,
            ScalarField::Country => &self.country,
            ScalarField::City => &self.city,
            ScalarField::ZipCode => &self.zip_code,
            ScalarField::District => &self.district,
            ScalarField::MapLocation => &self.map_location,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::PropertyTitle => &mut self.property_title,
            ScalarField::Description => &mut self.description,
            ScalarField::CategorySelection => &mut self.category_selection,
            ScalarField::Price => &mut self.price,
            ScalarField::Area => &mut self.area,
            ScalarField::Bedrooms => &mut self.bedrooms,
            ScalarField::Bathrooms => &mut self.bathrooms,
            ScalarField::Kitchens => &mut self.kitchens,
            ScalarField::Garages => &mut self.garages,
            ScalarField::GarageArea => &mut self.garage_area,
            ScalarField::YearBuilt => &mut self.year_built,
            ScalarField::Flours => &mut self.flours,
            ScalarField::Address => &mut self.address,
            ScalarField::Country => &mut self.country,
            ScalarField::City => &mut self.city,
            ScalarField::ZipCode => &mut self.zip_code,
            ScalarField::District => &mut self.district,
            ScalarField::MapLocation => &mut self.map_location,
        }
    }

    /// Absent amenities count as unselected
    pub fn amenity(&self, key: &str) -> bool {
        self.amenities.get(key).copied().unwrap_or(false)
    }
}

/// Contact details shown on the profile page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactSnapshot {
    pub email: String,
    pub phone_number: String,
}

/// Identifier handed out by the auth provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Text(id.to_string())
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Number(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(id) => write!(f, "{}", id),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

/// Signed-in user as seen by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
}

impl CurrentUser {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Error,
    Success,
}

/// Message shown to the user after a submission attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == AlertKind::Success
    }
}
