//! Geographic settings, companion payloads and persistence.
//!
//! The companion app sends partial updates keyed like the persisted fields:
//! any subset of daylight-saving offset, latitude, longitude and place name.
//! Updates are merged field by field into [`Settings`], which is also what gets
//! written to and restored from the [`SettingsStore`].
//!
//! Coordinates use the angle scale (360° = `FULL_TURN`), so a latitude of
//! 21.42° is stored as 3900. An unset coordinate is `None`; (0, 0) is a valid
//! position in the Gulf of Guinea.

use core::fmt;

use heapless::String;

use crate::angle::{self, Angle, FULL_TURN, HALF_TURN, QUARTER_TURN};
use crate::config::PLACE_NAME_LEN;

/// Place name as received from the companion, truncated to `PLACE_NAME_LEN`.
pub type PlaceName = String<PLACE_NAME_LEN>;

// =============================================================================
// Errors
// =============================================================================

/// Rejected coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    /// Latitude beyond ±90° (raw value attached).
    LatitudeOutOfRange(i32),
}

impl fmt::Display for CoordinateError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::LatitudeOutOfRange(lat) => write!(f, "latitude {lat} out of range"),
        }
    }
}

/// Persistence failure reported by a [`SettingsStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The backing medium refused the write.
    WriteFailed,
    /// Integer written to a text key or vice versa.
    TypeMismatch(SettingKey),
}

impl fmt::Display for StoreError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::WriteFailed => f.write_str("store write failed"),
            Self::TypeMismatch(key) => write!(f, "wrong value type for key {}", key.name()),
        }
    }
}

// =============================================================================
// Geographic Coordinate
// =============================================================================

/// Latitude/longitude on the angle scale.
///
/// Invariant: latitude in `[-QUARTER_TURN, QUARTER_TURN]`, longitude in
/// `(-HALF_TURN, HALF_TURN]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeoCoordinate {
    latitude: Angle,
    longitude: Angle,
}

impl GeoCoordinate {
    /// Build a coordinate, wrapping longitude and rejecting impossible latitudes.
    pub const fn new(
        latitude: Angle,
        longitude: Angle,
    ) -> Result<Self, CoordinateError> {
        if latitude < -QUARTER_TURN || latitude > QUARTER_TURN {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        let lon = angle::normalize(longitude);
        let longitude = if lon > HALF_TURN { lon - FULL_TURN } else { lon };
        Ok(Self { latitude, longitude })
    }

    /// Unchecked constructor for compile-time constants already in range.
    pub(crate) const fn from_raw(
        latitude: Angle,
        longitude: Angle,
    ) -> Self {
        Self { latitude, longitude }
    }

    /// Build a coordinate from decimal degrees (companion side conversion).
    pub fn from_degrees(
        latitude: f32,
        longitude: f32,
    ) -> Result<Self, CoordinateError> {
        Self::new(angle::from_degrees(latitude), angle::from_degrees(longitude))
    }

    #[inline]
    pub const fn latitude(&self) -> Angle { self.latitude }

    #[inline]
    pub const fn longitude(&self) -> Angle { self.longitude }
}

// =============================================================================
// Keys
// =============================================================================

/// Named fields shared by the companion message and the persistent store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SettingKey {
    /// Daylight-saving offset in minutes (negative while DST is observed).
    Dst = 0,
    /// Latitude, angle units.
    GeoLat = 1,
    /// Longitude, angle units.
    GeoLon = 2,
    /// Human-readable place name, passed through untouched.
    PlaceName = 3,
}

impl SettingKey {
    /// All keys in storage order.
    pub const ALL: [Self; 4] = [Self::Dst, Self::GeoLat, Self::GeoLon, Self::PlaceName];

    /// Stable field name used by text-based stores.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dst => "dst",
            Self::GeoLat => "geo_lat",
            Self::GeoLon => "geo_lon",
            Self::PlaceName => "place_name",
        }
    }

    /// Reverse of [`SettingKey::name`].
    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|key| key.name() == name) }

    /// Whether this key holds text rather than an integer.
    #[inline]
    pub const fn is_text(self) -> bool { matches!(self, Self::PlaceName) }
}

// =============================================================================
// Store Abstraction
// =============================================================================

/// Key/value persistence provided by the host.
pub trait SettingsStore {
    /// Read an integer field, `None` if never written.
    fn read_int(
        &self,
        key: SettingKey,
    ) -> Option<i32>;

    /// Write an integer field.
    fn write_int(
        &mut self,
        key: SettingKey,
        value: i32,
    ) -> Result<(), StoreError>;

    /// Read a text field, `None` if never written.
    fn read_text(
        &self,
        key: SettingKey,
    ) -> Option<PlaceName>;

    /// Write a text field.
    fn write_text(
        &mut self,
        key: SettingKey,
        value: &str,
    ) -> Result<(), StoreError>;
}

/// In-memory store, useful for hosts without flash and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    ints: [Option<i32>; 3],
    place_name: Option<PlaceName>,
}

impl MemoryStore {
    pub const fn new() -> Self {
        Self {
            ints: [None; 3],
            place_name: None,
        }
    }
}

impl SettingsStore for MemoryStore {
    fn read_int(
        &self,
        key: SettingKey,
    ) -> Option<i32> {
        if key.is_text() { None } else { self.ints[key as usize] }
    }

    fn write_int(
        &mut self,
        key: SettingKey,
        value: i32,
    ) -> Result<(), StoreError> {
        if key.is_text() {
            return Err(StoreError::TypeMismatch(key));
        }
        self.ints[key as usize] = Some(value);
        Ok(())
    }

    fn read_text(
        &self,
        key: SettingKey,
    ) -> Option<PlaceName> {
        if key.is_text() { self.place_name.clone() } else { None }
    }

    fn write_text(
        &mut self,
        key: SettingKey,
        value: &str,
    ) -> Result<(), StoreError> {
        if !key.is_text() {
            return Err(StoreError::TypeMismatch(key));
        }
        self.place_name = Some(bounded_text(value));
        Ok(())
    }
}

/// Copy `text` into a fixed-capacity string, dropping whatever does not fit.
pub fn bounded_text<const N: usize>(text: &str) -> String<N> {
    let mut out: String<N> = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// =============================================================================
// Companion Message
// =============================================================================

/// Partial settings update from the companion link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsMessage {
    pub dst_offset_minutes: Option<i32>,
    pub latitude: Option<Angle>,
    pub longitude: Option<Angle>,
    pub place_name: Option<PlaceName>,
}

impl SettingsMessage {
    /// Message carrying a complete position.
    pub const fn with_position(position: GeoCoordinate) -> Self {
        Self {
            dst_offset_minutes: None,
            latitude: Some(position.latitude),
            longitude: Some(position.longitude),
            place_name: None,
        }
    }
}

// =============================================================================
// Merged Settings
// =============================================================================

/// Last known settings, merged from messages or restored from the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    latitude: Option<Angle>,
    longitude: Option<Angle>,
    dst_offset_minutes: Option<i32>,
    place_name: PlaceName,
}

impl Settings {
    pub const fn new() -> Self {
        Self {
            latitude: None,
            longitude: None,
            dst_offset_minutes: None,
            place_name: String::new(),
        }
    }

    /// Current position, if both halves are known and valid.
    pub fn position(&self) -> Option<GeoCoordinate> {
        GeoCoordinate::new(self.latitude?, self.longitude?).ok()
    }

    /// Daylight-saving offset in minutes, 0 when unknown.
    #[inline]
    pub fn dst_offset_minutes(&self) -> i32 { self.dst_offset_minutes.unwrap_or(0) }

    /// Opaque place name (empty when none was sent).
    #[inline]
    pub fn place_name(&self) -> &str { self.place_name.as_str() }

    /// Merge a companion message.
    ///
    /// The message is validated as a whole first: a bad latitude rejects the
    /// entire update and leaves the settings unchanged.
    pub fn apply(
        &mut self,
        msg: &SettingsMessage,
    ) -> Result<(), CoordinateError> {
        let latitude = msg.latitude.or(self.latitude);
        let longitude = msg.longitude.or(self.longitude);
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => {
                GeoCoordinate::new(lat, lon)?;
            }
            (Some(lat), None) => {
                GeoCoordinate::new(lat, 0)?;
            }
            _ => {}
        }

        self.latitude = latitude;
        self.longitude = longitude;
        if let Some(dst) = msg.dst_offset_minutes {
            self.dst_offset_minutes = Some(dst);
        }
        if let Some(name) = &msg.place_name {
            self.place_name.clone_from(name);
        }
        Ok(())
    }

    /// Restore whatever the store has. Missing fields stay unset.
    pub fn load<S: SettingsStore>(store: &S) -> Self {
        Self {
            latitude: store.read_int(SettingKey::GeoLat),
            longitude: store.read_int(SettingKey::GeoLon),
            dst_offset_minutes: store.read_int(SettingKey::Dst),
            place_name: store.read_text(SettingKey::PlaceName).unwrap_or_default(),
        }
    }

    /// Write every known field to the store.
    pub fn save<S: SettingsStore>(
        &self,
        store: &mut S,
    ) -> Result<(), StoreError> {
        if let Some(dst) = self.dst_offset_minutes {
            store.write_int(SettingKey::Dst, dst)?;
        }
        if let Some(lat) = self.latitude {
            store.write_int(SettingKey::GeoLat, lat)?;
        }
        if let Some(lon) = self.longitude {
            store.write_int(SettingKey::GeoLon, lon)?;
        }
        if !self.place_name.is_empty() {
            store.write_text(SettingKey::PlaceName, &self.place_name)?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
