//! Static page data: which file gets which title, city and postal code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
    pub file: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationInfo {
    pub file: &'static str,
    pub city: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Postal code of `city`. Reference data only: no pass writes it into a page.
    pub zip: &'static str,
}

pub const SERVICES: &[ServiceInfo] = &[
    ServiceInfo {
        file: "ductless-mini-split-installation.html",
        title: "Ductless Mini Split Installation Belpre OH | Professional HVAC Installation",
        description: "Expert ductless mini split installation in Belpre, Ohio. Energy-efficient systems, professional technicians, same-day installation. Free estimates.",
        keywords: "ductless mini split installation Belpre OH, HVAC installation, mini split systems, energy efficient cooling heating",
    },
    ServiceInfo {
        file: "hvac-repair.html",
        title: "HVAC Repair Services Belpre OH | 24/7 Emergency Heating & Cooling Repair",
        description: "Expert HVAC repair services in Belpre, Ohio. 24/7 emergency heating and cooling repair. Licensed technicians. Same-day service.",
        keywords: "HVAC repair Belpre OH, heating repair, air conditioning repair, furnace repair, emergency HVAC",
    },
    ServiceInfo {
        file: "air-conditioning-installation.html",
        title: "Air Conditioning Installation Belpre OH | AC Installation Services",
        description: "Professional air conditioning installation in Belpre, Ohio. Energy-efficient AC systems, expert installation, free estimates.",
        keywords: "air conditioning installation Belpre OH, AC installation, cooling systems, central air",
    },
    ServiceInfo {
        file: "heating-installation.html",
        title: "Heating Installation Belpre OH | Furnace & Heat Pump Installation",
        description: "Professional heating system installation in Belpre, Ohio. Furnaces, heat pumps, boilers. Expert installation, energy-efficient systems.",
        keywords: "heating installation Belpre OH, furnace installation, heat pump installation, boiler installation",
    },
    ServiceInfo {
        file: "emergency-hvac.html",
        title: "24/7 Emergency HVAC Services Belpre OH | Emergency Heating & Cooling Repair",
        description: "24/7 emergency HVAC services in Belpre, Ohio. Emergency heating and cooling repair, same-day service, licensed technicians.",
        keywords: "emergency HVAC Belpre OH, 24/7 HVAC repair, emergency heating, emergency cooling",
    },
    ServiceInfo {
        file: "hvac-maintenance.html",
        title: "HVAC Maintenance Services Belpre OH | Heating & Cooling Maintenance",
        description: "Professional HVAC maintenance services in Belpre, Ohio. Preventive maintenance, tune-ups, service contracts.",
        keywords: "HVAC maintenance Belpre OH, heating maintenance, cooling maintenance, HVAC tune-up",
    },
    ServiceInfo {
        file: "commercial-hvac.html",
        title: "Commercial HVAC Services Belpre OH | Business Heating & Cooling",
        description: "Commercial HVAC services in Belpre, Ohio. Business heating and cooling installation, repair, maintenance.",
        keywords: "commercial HVAC Belpre OH, business HVAC, commercial heating cooling",
    },
    ServiceInfo {
        file: "ductwork-services.html",
        title: "Ductwork Services Belpre OH | Duct Installation, Cleaning & Repair",
        description: "Professional ductwork services in Belpre, Ohio. Duct installation, cleaning, repair, and replacement.",
        keywords: "ductwork services Belpre OH, duct installation, duct cleaning, duct repair",
    },
    ServiceInfo {
        file: "indoor-air-quality.html",
        title: "Indoor Air Quality Services Belpre OH | Air Purification & Filtration",
        description: "Indoor air quality services in Belpre, Ohio. Air purification, filtration systems, humidity control.",
        keywords: "indoor air quality Belpre OH, air purification, air filtration, humidity control",
    },
    ServiceInfo {
        file: "heat-pump-services.html",
        title: "Heat Pump Services Belpre OH | Heat Pump Installation & Repair",
        description: "Heat pump services in Belpre, Ohio. Installation, repair, maintenance of heat pump systems.",
        keywords: "heat pump services Belpre OH, heat pump installation, heat pump repair",
    },
];

pub const LOCATIONS: &[LocationInfo] = &[
    LocationInfo {
        file: "st-george.html",
        city: "Belpre",
        title: "Belpre Ohio Ductless Mini Split Installation & HVAC Services",
        description: "Expert ductless mini split installation, HVAC repair, and air conditioning services in Belpre, Ohio. 24/7 emergency service.",
        zip: "45714",
    },
    LocationInfo {
        file: "stapleton.html",
        city: "Marietta",
        title: "Marietta Ohio Ductless Mini Split Installation & HVAC Services",
        description: "Expert ductless mini split installation, HVAC repair, and air conditioning services in Marietta, Ohio. 24/7 emergency service.",
        zip: "45750",
    },
    LocationInfo {
        file: "port-richmond.html",
        city: "Little Hocking",
        title: "Little Hocking Ohio HVAC Services | Ductless Mini Split Installation",
        description: "Expert HVAC services in Little Hocking, Ohio. Ductless mini split installation, heating and cooling repair.",
        zip: "45742",
    },
    LocationInfo {
        file: "tottenville.html",
        city: "Vincent",
        title: "Vincent Ohio HVAC Services | Ductless Mini Split Installation",
        description: "Expert HVAC services in Vincent, Ohio. Ductless mini split installation, heating and cooling repair.",
        zip: "45784",
    },
    LocationInfo {
        file: "great-kills.html",
        city: "Barlow",
        title: "Barlow Ohio HVAC Services | Ductless Mini Split Installation",
        description: "Expert HVAC services in Barlow, Ohio. Ductless mini split installation, heating and cooling repair.",
        zip: "45712",
    },
    LocationInfo {
        file: "new-dorp.html",
        city: "Parkersburg, WV",
        title: "Parkersburg WV HVAC Services | Ductless Mini Split Installation",
        description: "Expert HVAC services in Parkersburg, West Virginia. Ductless mini split installation, heating and cooling repair.",
        zip: "26101",
    },
    LocationInfo {
        file: "west-brighton.html",
        city: "Beverly",
        title: "Beverly Ohio HVAC Services | Ductless Mini Split Installation",
        description: "Expert HVAC services in Beverly, Ohio. Ductless mini split installation, heating and cooling repair.",
        zip: "45715",
    },
    LocationInfo {
        file: "castleton-corners.html",
        city: "Williamstown, WV",
        title: "Williamstown WV HVAC Services | Ductless Mini Split Installation",
        description: "Expert HVAC services in Williamstown, West Virginia. Ductless mini split installation, heating and cooling repair.",
        zip: "26187",
    },
];

/// Location page file name to `(city, zip)`, used by the navigation pass.
///
/// The navigation pass only needs the city. The zip is reference data kept
/// alongside it and checked against [`LOCATIONS`] in tests.
pub const LOCATION_MAPPINGS: &[(&str, &str, &str)] = &[
    ("st-george.html", "Belpre", "45714"),
    ("stapleton.html", "Marietta", "45750"),
    ("port-richmond.html", "Little Hocking", "45742"),
    ("tottenville.html", "Vincent", "45784"),
    ("great-kills.html", "Barlow", "45712"),
    ("new-dorp.html", "Parkersburg, WV", "26101"),
    ("west-brighton.html", "Beverly", "45715"),
    ("castleton-corners.html", "Williamstown, WV", "26187"),
    ("new-brighton.html", "Parkersburg, WV", "26101"),
    ("south-beach.html", "Williamstown, WV", "26187"),
    ("willowbrook.html", "Athens", "45701"),
    ("clifton.html", "Vincent", "45784"),
    ("charleston.html", "Charleston, WV", "25301"),
    ("dongan-hills.html", "Beverly", "45715"),
    ("eltingville.html", "Little Hocking", "45742"),
    ("grant-city.html", "Barlow", "45712"),
    ("mariners-harbor.html", "Marietta", "45750"),
    ("oakwood.html", "Athens", "45701"),
    ("pleasant-plains.html", "Beverly", "45715"),
    ("richmond-valley.html", "Vincent", "45784"),
    ("bay-terrace.html", "Parkersburg, WV", "26101"),
];

/// `(href, label)` pairs of the canonical locations dropdown.
pub const DROPDOWN_ENTRIES: [(&str, &str); 8] = [
    ("st-george.html", "Belpre"),
    ("stapleton.html", "Marietta"),
    ("port-richmond.html", "Little Hocking"),
    ("tottenville.html", "Vincent"),
    ("great-kills.html", "Barlow"),
    ("new-dorp.html", "Parkersburg, WV"),
    ("west-brighton.html", "Beverly"),
    ("castleton-corners.html", "Williamstown, WV"),
];

/// Old-locale pages that no longer exist; links to them are dropped.
pub const DEPRECATED_PAGES: &[&str] = &[
    "bayonne-nj.html",
    "jersey-city-nj.html",
    "hoboken-nj.html",
    "brooklyn-ny.html",
    "manhattan-ny.html",
    "newark-nj.html",
    "elizabeth-nj.html",
    "perth-amboy-nj.html",
    "union-city-nj.html",
    "weehawken-nj.html",
    "rosebank.html",
];

pub const SECTION_LABELS: &[(&str, &str)] = &[
    ("Mid-Island:", "Central Ohio:"),
    ("North Shore:", "Washington County:"),
    ("South Shore:", "Southern Ohio:"),
    ("East Shore:", "West Virginia Border:"),
];

/// Old to new postal codes, rewritten only where they appear in parentheses.
pub const ZIP_CODES: &[(&str, &str)] = &[
    ("10305", "45714"),
    ("10306", "45750"),
    ("10307", "45784"),
    ("10308", "45712"),
    ("10309", "45715"),
    ("10310", "26101"),
    ("10311", "45742"),
    ("10312", "26187"),
    ("10313", "45701"),
    ("10314", "25301"),
];

/// Old neighbourhood names and the town each one now reads as.
pub const NEIGHBORHOOD_RENAMES: &[(&str, &str)] = &[
    ("Tottenville", "Marietta"),
    ("Great Kills", "Little Hocking"),
    ("Port Richmond", "Vincent"),
    ("New Brighton", "Parkersburg, WV"),
];

pub fn service_info(file: &str) -> Option<&'static ServiceInfo> {
    SERVICES.iter().find(|info| info.file == file)
}

pub fn location_info(file: &str) -> Option<&'static LocationInfo> {
    LOCATIONS.iter().find(|info| info.file == file)
}

/// `(city, zip)` for a location page listed in [`LOCATION_MAPPINGS`].
pub fn location_mapping(file: &str) -> Option<(&'static str, &'static str)> {
    LOCATION_MAPPINGS
        .iter()
        .find(|(name, _, _)| *name == file)
        .map(|&(_, city, zip)| (city, zip))
}
