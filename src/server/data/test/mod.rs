mod id;
mod moto;
mod patio;
mod status;
mod usuario;
mod zona;
