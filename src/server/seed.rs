//! Startup fixture loading.
//!
//! Fills an empty database with a small, fixed set of usuarios, zonas, patios, status
//! grupos, statuses and motos. The presence of any usuario marks the database as
//! already populated, so the seeder is safe to run on every start.

use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::server::{
    data::usuario::UsuarioRepository, error::AppError, service::usuario::hash_password,
};

/// (id, username, password)
const USUARIOS: &[(i64, &str, &str)] = &[(1, "admin", "admin123"), (2, "operador", "operador123")];

/// (id, nome, letra)
const ZONAS: &[(i64, &str, &str)] = &[
    (1, "Zona A", "A"),
    (2, "Zona B", "B"),
    (3, "Zona C", "C"),
];

/// (id, nome)
const PATIOS: &[(i64, &str)] = &[(1, "Pátio Centro"), (2, "Pátio Norte")];

/// (id, nome)
const STATUS_GRUPOS: &[(i64, &str)] = &[(1, "Operacional"), (2, "Manutenção"), (3, "Exceção")];

/// (id, nome, status_grupo_id)
const STATUSES: &[(i64, &str, i64)] = &[
    (1, "Disponível", 1),
    (2, "Em uso", 1),
    (3, "Em reparo", 2),
    (4, "Aguardando peça", 2),
    (5, "Roubada", 3),
    (6, "Sinistrada", 3),
];

/// (id, placa, chassi, zona_id, patio_id, status_id, observacoes)
const MOTOS: &[(i64, &str, &str, i64, i64, i64, Option<&str>)] = &[
    (1, "ABC1D23", "9C2KC1670LR000001", 1, 1, 1, None),
    (2, "DEF4G56", "9C2KC1670LR000002", 2, 1, 3, Some("Troca de embreagem")),
    (3, "GHI7J89", "9C2KC1670LR000003", 3, 2, 5, Some("Boletim de ocorrência registrado")),
];

/// Inserts the fixture set unless the database already holds a usuario.
///
/// All rows are written in a single transaction in dependency order, so a failure
/// leaves the database untouched.
///
/// # Returns
/// - `Ok(true)` - Fixtures were inserted
/// - `Ok(false)` - The database was already populated and nothing was written
/// - `Err(AppError)` - Hashing or a database operation failed
pub async fn seed_database(db: &DatabaseConnection) -> Result<bool, AppError> {
    if UsuarioRepository::new(db).count().await? > 0 {
        tracing::info!("Database already populated, skipping seed");
        return Ok(false);
    }

    // Hash before opening the transaction so it is held only for the inserts
    let mut usuarios = Vec::with_capacity(USUARIOS.len());
    for &(id, username, password) in USUARIOS {
        usuarios.push(entity::usuario::ActiveModel {
            id: ActiveValue::Set(id),
            username: ActiveValue::Set(username.to_string()),
            senha_hash: ActiveValue::Set(hash_password(password.to_string()).await?),
        });
    }

    let zonas = ZONAS.iter().map(|&(id, nome, letra)| entity::zona::ActiveModel {
        id: ActiveValue::Set(id),
        nome: ActiveValue::Set(nome.to_string()),
        letra: ActiveValue::Set(letra.to_string()),
    });

    let patios = PATIOS.iter().map(|&(id, nome)| entity::patio::ActiveModel {
        id: ActiveValue::Set(id),
        nome: ActiveValue::Set(nome.to_string()),
    });

    let status_grupos = STATUS_GRUPOS
        .iter()
        .map(|&(id, nome)| entity::status_grupo::ActiveModel {
            id: ActiveValue::Set(id),
            nome: ActiveValue::Set(nome.to_string()),
        });

    let statuses = STATUSES
        .iter()
        .map(|&(id, nome, status_grupo_id)| entity::status::ActiveModel {
            id: ActiveValue::Set(id),
            nome: ActiveValue::Set(nome.to_string()),
            status_grupo_id: ActiveValue::Set(status_grupo_id),
        });

    let now = Utc::now();
    let motos = MOTOS.iter().map(
        |&(id, placa, chassi, zona_id, patio_id, status_id, observacoes)| {
            entity::moto::ActiveModel {
                id: ActiveValue::Set(id),
                placa: ActiveValue::Set(placa.to_string()),
                chassi: ActiveValue::Set(chassi.to_string()),
                qr_code: ActiveValue::Set(Some(format!("QR-{}", placa))),
                data_entrada: ActiveValue::Set(now),
                previsao_entrega: ActiveValue::Set(Some(now + Duration::days(7))),
                fotos: ActiveValue::Set(None),
                zona_id: ActiveValue::Set(zona_id),
                patio_id: ActiveValue::Set(patio_id),
                status_id: ActiveValue::Set(status_id),
                observacoes: ActiveValue::Set(observacoes.map(str::to_string)),
            }
        },
    );

    let txn = db.begin().await?;

    entity::prelude::Usuario::insert_many(usuarios)
        .exec(&txn)
        .await?;
    entity::prelude::Zona::insert_many(zonas).exec(&txn).await?;
    entity::prelude::Patio::insert_many(patios).exec(&txn).await?;
    entity::prelude::StatusGrupo::insert_many(status_grupos)
        .exec(&txn)
        .await?;
    entity::prelude::Status::insert_many(statuses)
        .exec(&txn)
        .await?;
    entity::prelude::Moto::insert_many(motos).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        usuarios = USUARIOS.len(),
        zonas = ZONAS.len(),
        patios = PATIOS.len(),
        status_grupos = STATUS_GRUPOS.len(),
        statuses = STATUSES.len(),
        motos = MOTOS.len(),
        "Seeded database"
    );

    Ok(true)
}
