//! Closed enumerations stored as string literals.

use dtmap_document::field_enum;

field_enum! {
    /// Tile types.
    pub enum TileType {
        /// Straight road.
        Straight => "straight",
        /// 90 degree curve.
        Curve => "curve",
        /// Three-way intersection.
        ThreeWay => "3way",
        /// Four-way intersection.
        FourWay => "4way",
        /// Drivable surface with no lanes.
        Asphalt => "asphalt",
        /// Grass.
        Grass => "grass",
        /// Indoor floor.
        Floor => "floor",
    }
}

field_enum! {
    /// Tile orientations: the direction the tile's local north faces.
    pub enum Orientation {
        /// North.
        N => "N",
        /// East.
        E => "E",
        /// South.
        S => "S",
        /// West.
        W => "W",
    }
}

impl Orientation {
    /// Counter-clockwise rotation about +z, in degrees.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        match self {
            Self::N => 0.0,
            Self::W => 90.0,
            Self::S => 180.0,
            Self::E => 270.0,
        }
    }
}

field_enum! {
    /// Citizen (duckie) colors.
    pub enum CitizenColor {
        /// Yellow.
        Yellow => "yellow",
        /// Red.
        Red => "red",
        /// Green.
        Green => "green",
        /// Blue.
        Blue => "blue",
    }
}

field_enum! {
    /// Vehicle hardware configurations.
    #[allow(clippy::upper_case_acronyms)]
    pub enum VehicleType {
        /// DB18.
        DB18 => "DB18",
        /// DB19.
        DB19 => "DB19",
        /// DB21M.
        DB21M => "DB21M",
        /// DB21J.
        DB21J => "DB21J",
        /// DBR4.
        DBR4 => "DBR4",
    }
}

field_enum! {
    /// Vehicle chassis colors.
    pub enum VehicleColor {
        /// Red.
        Red => "red",
        /// Green.
        Green => "green",
        /// Blue.
        Blue => "blue",
        /// Yellow.
        Yellow => "yellow",
        /// Black.
        Black => "black",
        /// White.
        White => "white",
    }
}

field_enum! {
    /// Traffic sign types.
    pub enum TrafficSignType {
        /// Stop.
        Stop => "stop",
        /// Yield.
        Yield => "yield",
        /// No right turn.
        NoRightTurn => "no_right_turn",
        /// No left turn.
        NoLeftTurn => "no_left_turn",
        /// Do not enter.
        DoNotEnter => "do_not_enter",
        /// One way, to the right.
        OnewayRight => "oneway_right",
        /// One way, to the left.
        OnewayLeft => "oneway_left",
        /// Four-way intersection ahead.
        FourWayIntersect => "four_way_intersect",
        /// T intersection, branch to the right.
        RightTIntersect => "right_T_intersect",
        /// T intersection, branch to the left.
        LeftTIntersect => "left_T_intersect",
        /// T intersection ahead.
        TIntersection => "T_intersection",
        /// Pedestrian crossing.
        Pedestrian => "pedestrian",
        /// Traffic light ahead.
        TLightAhead => "t_light_ahead",
        /// Duck crossing.
        DuckCrossing => "duck_crossing",
        /// Parking.
        Parking => "parking",
    }
}

field_enum! {
    /// Watchtower hardware configurations.
    #[allow(clippy::upper_case_acronyms)]
    pub enum WatchtowerType {
        /// WT18.
        WT18 => "WT18",
        /// WT19.
        WT19 => "WT19",
        /// WT21.
        WT21 => "WT21",
    }
}
