use serde::{Deserialize, Serialize};

use crate::bin_constants::{
    DEFAULT_ARGON2_M_COST,
    DEFAULT_ARGON2_OUTPUT_LEN,
    DEFAULT_ARGON2_P_COST,
    DEFAULT_ARGON2_T_COST,
};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HasherConfig {
    pub m_cost: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        HasherConfig {
            m_cost: DEFAULT_ARGON2_M_COST,
            t_cost: DEFAULT_ARGON2_T_COST,
            p_cost: DEFAULT_ARGON2_P_COST,
        }
    }
}

impl TryFrom<HasherConfig> for argon2::Params {
    type Error = argon2::Error;

    fn try_from(value: HasherConfig) -> Result<Self, Self::Error> {
        argon2::Params::new(
            value.m_cost,
            value.t_cost,
            value.p_cost,
            DEFAULT_ARGON2_OUTPUT_LEN,
        )
    }
}
