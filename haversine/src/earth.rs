/// Earth radius in kilometres used for every distance in the data sets.
pub const RADIUS: f64 = 6372.8;
