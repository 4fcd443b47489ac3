//! Static client logo table shown in the "good company" grid.

/// A client name and its logo image URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientLogo {
    pub name: &'static str,
    pub logo: &'static str,
}

/// Logo used by the page-level testimonial.
pub const MINLANDSBY_LOGO: &str = "/images/clients/minlandsby/logo-light.svg";

/// Clients in display order.
pub static CLIENTS: [ClientLogo; 10] = [
    ClientLogo { name: "Google", logo: "/images/clients/google/logo-light.svg" },
    ClientLogo { name: "Bloc", logo: "/images/clients/bloc/logo-light.svg" },
    ClientLogo { name: "Riverpod", logo: "/images/clients/riverpod/logo-light.svg" },
    ClientLogo { name: "Etiya", logo: "/images/clients/etiya/logo-light.svg" },
    ClientLogo { name: "BearPeak", logo: "/images/clients/bearpeak/logo-light.svg" },
    ClientLogo { name: "Strapt", logo: "/images/clients/strapt/logo-light.svg" },
    ClientLogo { name: "MinlandsBy", logo: MINLANDSBY_LOGO },
    ClientLogo { name: "Stride", logo: "/images/clients/stride/logo-light.png" },
    ClientLogo { name: "Overlapp", logo: "/images/clients/overlapp/logo-light.png" },
    ClientLogo { name: "SoS", logo: "/images/clients/sos/logo-light.png" },
];
