pub mod error;
pub mod tags;

pub mod health {
    pub mod routes;
}

pub mod prescription {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod session {
    pub mod dto;
    pub mod routes;
}
