//! Shared fixtures for end-to-end interpretation tests.

use petrophys::{
    LimitExt, Limits, SolverConfig,
    clay::{ClayVolumeMethod, gr_clay_volume},
    convert::{TemperatureUnit, convert_temperature},
    porosity::porosity_density,
    saturation::{
        WaxmanSmits, WaxmanSmitsError, equiv_cond_exchange_cations_b, qv_cec, sw_archie,
        sw_waxman_smits,
    },
};

/// Log readings and zone parameters for one depth sample.
#[derive(Debug, Clone, Copy)]
pub struct DepthSample {
    pub gr: f64,
    pub gr_clean: f64,
    pub gr_shale: f64,
    pub rho_bulk: f64,
    pub rho_matrix: f64,
    pub rho_fluid: f64,
    pub rt: f64,
    pub rw: f64,
    pub temperature_f: f64,
    pub rho_dry_clay: f64,
    pub cec: f64,
}

/// Derived properties of a depth sample.
#[derive(Debug, Clone, Copy)]
pub struct Interpretation {
    pub vclay: f64,
    pub phit: f64,
    pub sw_archie: f64,
    pub sw_waxman_smits: f64,
}

/// A typical shaly sandstone sample.
#[must_use]
pub fn shaly_sand() -> DepthSample {
    DepthSample {
        gr: 75.0,
        gr_clean: 30.0,
        gr_shale: 150.0,
        rho_bulk: 2.32,
        rho_matrix: 2.65,
        rho_fluid: 1.0,
        rt: 12.0,
        rw: 0.05,
        temperature_f: 176.0,
        rho_dry_clay: 2.65,
        cec: 2.0,
    }
}

/// Runs a standard clay, porosity and saturation sequence on a sample.
///
/// # Errors
///
/// Returns the first formula error raised along the way.
pub fn interpret(sample: &DepthSample) -> Result<Interpretation, WaxmanSmitsError> {
    let vclay = gr_clay_volume(
        sample.gr_clean,
        sample.gr_shale,
        sample.gr,
        ClayVolumeMethod::LarionovYoung,
    )
    .limit(&Limits::fraction())?;

    let phit = porosity_density(sample.rho_matrix, sample.rho_fluid, sample.rho_bulk)
        .limit(&Limits::porosity())?;

    let sw_archie = sw_archie(phit, sample.rw, sample.rt, 1.0, 2.0, 2.0)?;

    let temperature_c = convert_temperature(
        sample.temperature_f,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Celsius,
    );
    let input = WaxmanSmits {
        rw: sample.rw,
        rt: sample.rt,
        b: equiv_cond_exchange_cations_b(temperature_c, sample.rw)?,
        qv: qv_cec(sample.rho_dry_clay, phit, sample.cec * vclay)?,
        a: 1.0,
        phit,
        m_star: 2.0,
        n_star: 2.0,
    };
    let solution = sw_waxman_smits(&input, &SolverConfig::default())?;

    Ok(Interpretation {
        vclay,
        phit,
        sw_archie,
        sw_waxman_smits: solution.sw,
    })
}
