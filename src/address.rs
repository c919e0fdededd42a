//! Talker identifiers and sentence format mnemonics.
//!
//! Both are closed tables fixed by IEC 61162-1. Lookups by code or ordinal
//! are checked; a decoded talker outside the table is kept as
//! [`Talker::Unknown`] rather than coerced onto a known one.

code_enum! {
    /// Two-letter talker identifier.
    pub enum TalkerId {
        /// Heading/track controller, general
        "AG" => Ag,
        /// Heading/track controller, magnetic
        "AP" => Ap,
        /// Automatic identification system
        "AI" => Ai,
        /// Digital selective calling
        "CD" => Cd,
        /// Data receiver
        "CR" => Cr,
        /// Satellite communications
        "CS" => Cs,
        /// Radio-telephone (MF/HF)
        "CT" => Ct,
        /// Radio-telephone (VHF)
        "CV" => Cv,
        /// Scanning receiver
        "CX" => Cx,
        /// DECCA navigator
        "DE" => De,
        /// Direction finder
        "DF" => Df,
        /// Electronic chart system
        "EC" => Ec,
        /// Electronic chart display and information system
        "EI" => Ei,
        /// Emergency position indicating radio beacon
        "EP" => Ep,
        /// Engine room monitoring
        "ER" => Er,
        /// Galileo receiver
        "GA" => Ga,
        /// GPS receiver
        "GP" => Gp,
        /// GLONASS receiver
        "GL" => Gl,
        /// Combined GNSS receiver
        "GN" => Gn,
        /// SBAS receiver
        "GW" => Gw,
        /// Magnetic compass
        "HC" => Hc,
        /// North seeking gyro
        "HE" => He,
        /// Non-north seeking gyro
        "HN" => Hn,
        /// Integrated instrumentation
        "II" => Ii,
        /// Integrated navigation
        "IN" => In,
        /// LORAN-C
        "LC" => Lc,
        /// Radar and/or radar plotting
        "RA" => Ra,
        /// Depth sounder
        "SD" => Sd,
        /// Electronic positioning system, other
        "SN" => Sn,
        /// Scanning sounder
        "SS" => Ss,
        /// Turn rate indicator
        "TI" => Ti,
        /// Doppler velocity sensor
        "VD" => Vd,
        /// Speed log, water, magnetic
        "VM" => Vm,
        /// Speed log, water, mechanical
        "VW" => Vw,
        /// Voyage data recorder
        "VR" => Vr,
        /// Transducer
        "YX" => Yx,
        /// Atomic clock
        "ZA" => Za,
        /// Chronometer
        "ZC" => Zc,
        /// Quartz clock
        "ZQ" => Zq,
        /// Radio update clock
        "ZV" => Zv,
        /// Weather instruments
        "WI" => Wi,
    }
}

code_enum! {
    /// Three-letter sentence format mnemonic.
    pub enum SentenceFormat {
        /// Waypoint arrival alarm
        "AAM" => Aam,
        /// Acknowledge alarm
        "ACK" => Ack,
        /// GPS almanac data
        "ALM" => Alm,
        /// Set alarm state
        "ALR" => Alr,
        /// Heading/track controller sentence B
        "APB" => Apb,
        /// Bearing and distance to waypoint, dead reckoning
        "BEC" => Bec,
        /// Bearing, origin to destination
        "BOD" => Bod,
        /// Bearing and distance to waypoint
        "BWC" => Bwc,
        /// Bearing and distance to waypoint, rhumb line
        "BWR" => Bwr,
        /// Bearing, waypoint to waypoint
        "BWW" => Bww,
        /// Depth below transducer
        "DBT" => Dbt,
        /// DECCA position
        "DCN" => Dcn,
        /// Depth
        "DPT" => Dpt,
        /// Digital selective calling information
        "DSC" => Dsc,
        /// Expanded digital selective calling
        "DSE" => Dse,
        /// DSC transponder initialize
        "DSI" => Dsi,
        /// DSC transponder response
        "DSR" => Dsr,
        /// Datum reference
        "DTM" => Dtm,
        /// Frequency set information
        "FSI" => Fsi,
        /// GNSS satellite fault detection
        "GBS" => Gbs,
        /// GPS fix data
        "GGA" => Gga,
        /// Geographic position, LORAN-C
        "GLC" => Glc,
        /// Geographic position, latitude/longitude
        "GLL" => Gll,
        /// GNSS fix data
        "GNS" => Gns,
        /// GNSS range residuals
        "GRS" => Grs,
        /// GNSS DOP and active satellites
        "GSA" => Gsa,
        /// GNSS pseudorange error statistics
        "GST" => Gst,
        /// GNSS satellites in view
        "GSV" => Gsv,
        /// Heading, deviation and variation
        "HDG" => Hdg,
        /// Heading, true
        "HDT" => Hdt,
        /// Heading monitor, receive
        "HMR" => Hmr,
        /// Heading monitor, set
        "HMS" => Hms,
        /// Heading steering command
        "HSC" => Hsc,
        /// Heading/track control command
        "HTC" => Htc,
        /// Heading/track control data
        "HTD" => Htd,
        /// LORAN-C signal data
        "LCD" => Lcd,
        /// GLONASS almanac data
        "MLA" => Mla,
        /// MSK receiver interface
        "MSK" => Msk,
        /// MSK receiver signal status
        "MSS" => Mss,
        /// Water temperature
        "MTW" => Mtw,
        /// Wind direction and speed
        "MWD" => Mwd,
        /// Wind speed and angle
        "MWV" => Mwv,
        /// Own ship data
        "OSD" => Osd,
        /// Recommended minimum specific LORAN-C data
        "RMA" => Rma,
        /// Recommended minimum navigation information
        "RMB" => Rmb,
        /// Recommended minimum specific GNSS data
        "RMC" => Rmc,
        /// Rate of turn
        "ROT" => Rot,
        /// Revolutions
        "RPM" => Rpm,
        /// Rudder sensor angle
        "RSA" => Rsa,
        /// Radar system data
        "RSD" => Rsd,
        /// Routes
        "RTE" => Rte,
        /// Scanning frequency information
        "SFI" => Sfi,
        /// Multiple data ID
        "STN" => Stn,
        /// Target label
        "TLB" => Tlb,
        /// Target latitude and longitude
        "TLL" => Tll,
        /// Tracked target message
        "TTM" => Ttm,
        /// Text transmission
        "TXT" => Txt,
        /// Dual ground/water speed
        "VBW" => Vbw,
        /// Set and drift
        "VDR" => Vdr,
        /// Water speed and heading
        "VHW" => Vhw,
        /// Distance travelled through the water
        "VLW" => Vlw,
        /// Speed parallel to wind
        "VPW" => Vpw,
        /// Course over ground and ground speed
        "VTG" => Vtg,
        /// Waypoint closure velocity
        "WCV" => Wcv,
        /// Distance, waypoint to waypoint
        "WNC" => Wnc,
        /// Waypoint location
        "WPL" => Wpl,
        /// Transducer measurements
        "XDR" => Xdr,
        /// Cross-track error, measured
        "XTE" => Xte,
        /// Cross-track error, dead reckoning
        "XTR" => Xtr,
        /// Time and date
        "ZDA" => Zda,
        /// Time and distance to variable point
        "ZDL" => Zdl,
        /// UTC and time from origin waypoint
        "ZFO" => Zfo,
        /// UTC and time to destination waypoint
        "ZTG" => Ztg,
    }
}

/// Talker of a decoded or generated sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Talker {
    Id(TalkerId),
    /// A well-formed two-letter code outside the talker table.
    Unknown(heapless::String<2>),
}

impl Talker {
    /// Resolves a two-letter code. Anything but two uppercase ASCII letters
    /// or digits is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.len() != 2
            || !code
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return None;
        }

        match TalkerId::from_code(code) {
            Some(id) => Some(Talker::Id(id)),
            None => {
                let mut unknown = heapless::String::new();
                unknown.push_str(code).ok()?;
                Some(Talker::Unknown(unknown))
            }
        }
    }

    /// The code this talker generates with; unknown talkers have none.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Talker::Id(id) => Some(id.code()),
            Talker::Unknown(_) => None,
        }
    }
}

impl From<TalkerId> for Talker {
    fn from(id: TalkerId) -> Self {
        Talker::Id(id)
    }
}

impl core::fmt::Display for Talker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Talker::Id(id) => f.write_str(id.code()),
            Talker::Unknown(code) => f.write_str(code),
        }
    }
}
