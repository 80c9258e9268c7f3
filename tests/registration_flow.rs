//! End-to-end user registration built from validation, an async hashing step
//! and an impure storage write.

use std::sync::{Arc, Mutex};

use brook::testing::CallCounter;
use brook::{assert_failure, assert_success, pipe};
use brook::{AsyncEffect, ImpureAsyncEffect, Outcome, SyncEffect};

#[derive(Debug, Clone, PartialEq)]
struct SignupRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq)]
struct CreateUserArgs {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: usize,
    username: String,
    email: String,
    password_hash: String,
}

#[derive(Debug, Clone, PartialEq)]
enum RegistrationError {
    Invalid(Vec<String>),
    Hash(String),
    Storage(String),
}

#[derive(Debug, Default)]
struct UserStore {
    users: Mutex<Vec<User>>,
    writes: CallCounter,
}

impl UserStore {
    fn insert(&self, args: CreateUserArgs) -> Result<User, RegistrationError> {
        self.writes.tick();
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == args.email) {
            return Err(RegistrationError::Storage(format!(
                "email {} already registered",
                args.email
            )));
        }
        let user = User {
            id: users.len() + 1,
            username: args.username,
            email: args.email,
            password_hash: args.password,
        };
        users.push(user.clone());
        Ok(user)
    }
}

fn validate(request: SignupRequest) -> Outcome<RegistrationError, CreateUserArgs> {
    let mut errors = Vec::new();
    if request.username.trim().is_empty() {
        errors.push("username is required".to_string());
    }
    if !request.email.contains('@') {
        errors.push("email must contain @".to_string());
    }
    if request.password.len() < 8 {
        errors.push("password must be at least 8 characters".to_string());
    }

    if errors.is_empty() {
        Outcome::pure(CreateUserArgs {
            username: request.username.trim().to_string(),
            email: request.email,
            password: request.password,
        })
    } else {
        Outcome::pure_failure(RegistrationError::Invalid(errors))
    }
}

fn hash_password(
    hashes: CallCounter,
) -> impl Fn(CreateUserArgs) -> AsyncEffect<Outcome<RegistrationError, CreateUserArgs>> + Send + Sync
{
    move |args| {
        let hashes = hashes.clone();
        AsyncEffect::pure(move || {
            let args = args.clone();
            let hashes = hashes.clone();
            async move {
                tokio::task::yield_now().await;
                hashes.tick();
                if args.password.contains('\0') {
                    Outcome::pure_failure(RegistrationError::Hash(
                        "password contains a NUL byte".to_string(),
                    ))
                } else {
                    let password = format!("hashed:{}", args.password.len());
                    Outcome::pure(CreateUserArgs { password, ..args })
                }
            }
        })
    }
}

fn create_user(
    store: Arc<UserStore>,
) -> impl Fn(CreateUserArgs) -> ImpureAsyncEffect<Outcome<RegistrationError, User>> + Send + Sync {
    move |args| {
        let store = Arc::clone(&store);
        ImpureAsyncEffect::attempt(move || {
            let store = Arc::clone(&store);
            let args = args.clone();
            async move { store.insert(args) }
        })
    }
}

fn register(
    store: Arc<UserStore>,
    hashes: CallCounter,
) -> impl Fn(SignupRequest) -> ImpureAsyncEffect<Outcome<RegistrationError, User>> {
    pipe!(
        |request: SignupRequest| {
            ImpureAsyncEffect::lift(SyncEffect::of(
                Outcome::<RegistrationError, SignupRequest>::pure(request),
            ))
        },
        |effect: ImpureAsyncEffect<Outcome<RegistrationError, SignupRequest>>| {
            effect.try_map_success(validate)
        },
        move |effect: ImpureAsyncEffect<Outcome<RegistrationError, CreateUserArgs>>| {
            effect.bind_success(hash_password(hashes.clone()))
        },
        move |effect: ImpureAsyncEffect<Outcome<RegistrationError, CreateUserArgs>>| {
            effect.bind_success(create_user(Arc::clone(&store)))
        },
    )
}

fn request(password: &str) -> SignupRequest {
    SignupRequest {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn successful_registration_returns_user() {
    let store = Arc::new(UserStore::default());
    let hashes = CallCounter::new();
    let handler = register(Arc::clone(&store), hashes.clone());

    let user = assert_success!(handler(request("correct horse")).run().await);

    assert_eq!(
        user,
        User {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hashed:13".to_string(),
        }
    );
    assert_eq!(hashes.count(), 1);
    assert_eq!(store.writes.count(), 1);
    assert_eq!(store.users.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn hashing_failure_skips_storage() {
    let store = Arc::new(UserStore::default());
    let hashes = CallCounter::new();
    let handler = register(Arc::clone(&store), hashes.clone());

    let error = assert_failure!(handler(request("pass\0word")).run().await);

    assert_eq!(
        error,
        RegistrationError::Hash("password contains a NUL byte".to_string())
    );
    assert_eq!(hashes.count(), 1);
    assert_eq!(store.writes.count(), 0);
    assert!(store.users.lock().unwrap().is_empty());
}

#[tokio::test]
async fn validation_failure_skips_hashing_and_storage() {
    let store = Arc::new(UserStore::default());
    let hashes = CallCounter::new();
    let handler = register(Arc::clone(&store), hashes.clone());

    let invalid = SignupRequest {
        username: "  ".to_string(),
        email: "nobody".to_string(),
        password: "short".to_string(),
    };
    let error = assert_failure!(handler(invalid).run().await);

    assert_eq!(
        error,
        RegistrationError::Invalid(vec![
            "username is required".to_string(),
            "email must contain @".to_string(),
            "password must be at least 8 characters".to_string(),
        ])
    );
    assert_eq!(hashes.count(), 0);
    assert_eq!(store.writes.count(), 0);
}

#[tokio::test]
async fn building_the_handler_effect_runs_nothing() {
    let store = Arc::new(UserStore::default());
    let hashes = CallCounter::new();
    let handler = register(Arc::clone(&store), hashes.clone());

    let effect = handler(request("correct horse"));
    assert_eq!(hashes.count(), 0);
    assert_eq!(store.writes.count(), 0);

    assert!(effect.run().await.is_success());
    assert_eq!(store.writes.count(), 1);
}

#[tokio::test]
async fn rerunning_performs_the_write_again() {
    let store = Arc::new(UserStore::default());
    let handler = register(Arc::clone(&store), CallCounter::new());
    let effect = handler(request("correct horse"));

    assert!(effect.run().await.is_success());
    let error = assert_failure!(effect.run().await);

    assert_eq!(
        error,
        RegistrationError::Storage("email ada@example.com already registered".to_string())
    );
    assert_eq!(store.writes.count(), 2);
}

#[tokio::test]
async fn outcome_is_eliminated_into_a_response() {
    let store = Arc::new(UserStore::default());
    let handler = register(store, CallCounter::new());

    let respond = |effect: ImpureAsyncEffect<Outcome<RegistrationError, User>>| {
        effect.fold_outcome(
            |error| match error {
                RegistrationError::Invalid(_) => (400, "invalid request".to_string()),
                RegistrationError::Hash(_) | RegistrationError::Storage(_) => {
                    (500, "internal error".to_string())
                }
            },
            |user| (201, format!("created user {}", user.id)),
        )
    };

    assert_eq!(
        respond(handler(request("correct horse"))).run().await,
        (201, "created user 1".to_string())
    );
    assert_eq!(
        respond(handler(request("short"))).run().await,
        (400, "invalid request".to_string())
    );
    assert_eq!(
        respond(handler(request("correct horse"))).run().await,
        (500, "internal error".to_string())
    );
}
