use domain::{Audience, DomainError, Role, ScopeIds, UserIdentity};

#[test]
fn role_parses_known_values() {
    assert_eq!("superadmin".parse::<Role>(), Ok(Role::Superadmin));
    assert_eq!("curator".parse::<Role>(), Ok(Role::Curator));
    assert_eq!("operator".parse::<Role>(), Ok(Role::Operator));
}

#[test]
fn role_rejects_unknown_value() {
    let err = "admin".parse::<Role>().unwrap_err();
    assert_eq!(err, DomainError::UnknownRole("admin".to_string()));
    // 大小写敏感，与服务端比较方式一致
    assert!("Operator".parse::<Role>().is_err());
}

#[test]
fn audience_token_id_rule() {
    assert!(Audience::Refresh.carries_token_id());
    assert!(!Audience::Access.carries_token_id());
    assert_eq!("refresh".parse::<Audience>(), Ok(Audience::Refresh));
    assert!("id".parse::<Audience>().is_err());
}

#[test]
fn identity_defaults_to_no_scope() {
    let user = UserIdentity::new(1, "operator@example.com", Role::Operator);
    assert_eq!(user.scope, ScopeIds::default());

    let scoped = user.with_scope(ScopeIds::university(0));
    assert_eq!(scoped.scope.university_id, Some(0));
    assert_eq!(scoped.scope.branch_id, None);
}
