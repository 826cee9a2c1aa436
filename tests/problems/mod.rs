mod axial_beam;
mod catalog;
mod reference;
mod rp57;
mod rp60;
mod rp77;
