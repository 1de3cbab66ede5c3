/// Transport modes a road can be restricted for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessMode {
    Foot,
    Bicycle,
    SmallMotorcycle,
    AgriculturalVehicle,
    Motorcycle,
    Motorcar,
    HeavyGoods,
    PublicTransport,
}

impl AccessMode {
    pub const ALL: [AccessMode; 8] = [
        AccessMode::Foot,
        AccessMode::Bicycle,
        AccessMode::SmallMotorcycle,
        AccessMode::AgriculturalVehicle,
        AccessMode::Motorcycle,
        AccessMode::Motorcar,
        AccessMode::HeavyGoods,
        AccessMode::PublicTransport,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccessRestriction {
    Allowed,
    Forbidden,
    Private,
    Destination,
    Delivery,
    Customers,
    Forestry,
    Agricultural,
    #[default]
    Unknown,
}

impl AccessRestriction {
    /// Restrictions that close a road to regular traffic of a mode.
    const CLOSED: [AccessRestriction; 4] = [
        AccessRestriction::Forbidden,
        AccessRestriction::Private,
        AccessRestriction::Agricultural,
        AccessRestriction::Forestry,
    ];

    pub fn is_closed(self) -> bool {
        Self::CLOSED.contains(&self)
    }
}

/// One restriction level per [`AccessMode`]. Modes without information are
/// [`AccessRestriction::Unknown`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AccessRestrictions {
    restrictions: [AccessRestriction; AccessMode::ALL.len()],
}

impl AccessRestrictions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_for_all() -> Self {
        AccessRestrictions {
            restrictions: [AccessRestriction::Allowed; AccessMode::ALL.len()],
        }
    }

    pub fn with(mut self, mode: AccessMode, restriction: AccessRestriction) -> Self {
        self.restrictions[mode.index()] = restriction;
        self
    }

    pub fn with_modes(mut self, modes: &[AccessMode], restriction: AccessRestriction) -> Self {
        for mode in modes {
            self.restrictions[mode.index()] = restriction;
        }
        self
    }

    pub fn restriction(&self, mode: AccessMode) -> AccessRestriction {
        self.restrictions[mode.index()]
    }

    /// A road is accessible for a mode unless it is explicitly closed for it,
    /// unknown restrictions count as accessible.
    pub fn is_accessible_for(&self, mode: AccessMode) -> bool {
        !self.restriction(mode).is_closed()
    }

    /// Whether the restriction for `mode` is one of `allowed`.
    pub fn is_allowed_for_any(&self, mode: AccessMode, allowed: &[AccessRestriction]) -> bool {
        allowed.contains(&self.restriction(mode))
    }

    /// Whether the restriction of every mode in `modes` is one of `allowed`.
    pub fn is_allowed_for_all(&self, modes: &[AccessMode], allowed: &[AccessRestriction]) -> bool {
        modes
            .iter()
            .all(|mode| self.is_allowed_for_any(*mode, allowed))
    }
}
