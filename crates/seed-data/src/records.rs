//! Literal sample records inserted by the seeder.

use catalog::Role;

/// A product row to seed.
#[derive(Debug, Clone, Copy)]
pub struct ProductSeed {
    pub name: &'static str,
    pub price: f64,
    pub description: &'static str,
    pub stock: i32,
}

/// A user row to seed. The password is plaintext and only ever hashed before insertion.
#[derive(Debug, Clone, Copy)]
pub struct UserSeed {
    pub username: &'static str,
    pub password: &'static str,
    pub display_name: &'static str,
    pub role: Role,
}

const fn product(
    name: &'static str,
    price: f64,
    description: &'static str,
    stock: i32,
) -> ProductSeed {
    ProductSeed {
        name,
        price,
        description,
        stock,
    }
}

const fn user(
    username: &'static str,
    password: &'static str,
    display_name: &'static str,
    role: Role,
) -> UserSeed {
    UserSeed {
        username,
        password,
        display_name,
        role,
    }
}

pub const PRODUCTS: [ProductSeed; 20] = [
    product("Pan de Camas", 1.20, "Pan de masa madre", 15),
    product("Aceitunas aliñadas de Camas", 2.50, "Aceitunas negras con aliño", 5),
    product("Tortas de aceite", 3.00, "Tortas de Ines rosales", 15),
    product("Aceite Virgen Extra “Aljarafe”", 6.80, "Aceite exclusivo de la zona de sevilla", 15),
    product("Jamón ibérico de recebo", 12.50, "Jamon de buena calidad", 115),
    product("Queso de cabra payoya", 4.75, "Cabras criadas en libertad", 20),
    product("Miel de azahar del Aljarafe", 5.20, "Miel de Azahar de Gines", 15),
    product("Almendras fritas estilo barra", 3.40, "Almendras de la zona de Granada", 25),
    product("Bollos de anís tradicionales", 2.30, "Hechos en una fabrica familiar de Bollulos", 200),
    product("Paté de aceituna verde", 3.10, "Algo amargo pero muy bueno", 15),
    product("Vino blanco DO “Aljarafe”", 8.50, "Vino de la fabrica mas antigua de España", 150),
    product("Dulce de membrillo artesano", 2.90, "Manjar para dioses", 15),
    product("Anchoas en aceite de oliva", 7.20, "Del cantabrico", 15),
    product("Chorizo casero del Aljarafe", 4.60, "Perfecto para hacer chorizo al infierno", 15),
    product("Flor de sal del Guadalquivir", 2.70, "Utilizado en los mejores restaurantes de la zona", 15),
    product("Mermelada de higo de la zona", 3.30, "Perfecto para untar", 15),
    product("Cervezas artesanas sevillanas", 2.80, "Para los mas cerveceros, de grano integral", 15),
    product("Tomate seco en aceite", 4.20, "Las pequeñas delicateces", 15),
    product("Aceite arbequina 250 ml", 5.60, "Aceitunas negras con aliño", 15),
    product("Picos de pan artesanos", 1.80, "Pan de masa madre", 15),
];

pub const USERS: [UserSeed; 8] = [
    user("admin", "admin123", "Administrador General", Role::Admin),
    user("manager1", "manager1", "Laura Gestora", Role::Manager),
    user("manager2", "manager2", "Carlos Supervisor", Role::Manager),
    user("user1", "user1", "María Compradora", Role::Customer),
    user("user2", "user2", "Pedro Cliente", Role::Customer),
    user("user3", "user3", "Lucía Compradora", Role::Customer),
    user("user4", "user4", "Manuel Perez", Role::Customer),
    user("user5", "user5", "Tess test", Role::Customer),
];
