mod resource {
    pub mod person;
}

#[cfg(test)]
mod tests {
    use crate::resource::person::{AGE, ID, NAME};
    use silo::{Context, Expression, ExpressionExt, GenericSqlWriter, Value};

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();

    fn render(expression: &dyn Expression) -> (String, Vec<Value>) {
        let mut out = String::new();
        let mut context = Context::new();
        expression.write_query(&WRITER, &mut context, &mut out);
        (out, context.params)
    }

    #[test]
    fn comparison_binds_the_literal() {
        let (sql, params) = render(&ID.eq(2));
        assert_eq!(sql, r#""id" = ?"#);
        assert_eq!(params, vec![Value::Integer(Some(2))]);
    }

    #[test]
    fn every_comparison_operator() {
        assert_eq!(render(&ID.eq(1)).0, r#""id" = ?"#);
        assert_eq!(render(&ID.ne(1)).0, r#""id" != ?"#);
        assert_eq!(render(&ID.lt(1)).0, r#""id" < ?"#);
        assert_eq!(render(&ID.le(1)).0, r#""id" <= ?"#);
        assert_eq!(render(&ID.gt(1)).0, r#""id" > ?"#);
        assert_eq!(render(&ID.ge(1)).0, r#""id" >= ?"#);
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let expression = ID.eq(2).or(AGE.lt(18).and(NAME.ne("root")));
        let (sql, params) = render(&expression);
        assert_eq!(sql, r#""id" = ? OR "age" < ? AND "name" != ?"#);
        assert_eq!(
            params,
            vec![
                Value::Integer(Some(2)),
                Value::Integer(Some(18)),
                Value::Text(Some("root".into())),
            ]
        );
    }

    #[test]
    fn nested_or_is_parenthesized_under_and() {
        let expression = ID.eq(1).or(ID.eq(2)).and(AGE.ge(3));
        let (sql, _) = render(&expression);
        assert_eq!(sql, r#"("id" = ? OR "id" = ?) AND "age" >= ?"#);
    }

    #[test]
    fn negation_parenthesizes_its_operand() {
        let expression = ID.eq(1).and(AGE.ge(2)).not();
        let (sql, params) = render(&expression);
        assert_eq!(sql, r#"NOT ("id" = ? AND "age" >= ?)"#);
        assert_eq!(
            params,
            vec![Value::Integer(Some(1)), Value::Integer(Some(2))]
        );
    }

    #[test]
    fn chained_and_needs_no_parentheses() {
        let expression = ID.ge(1).and(ID.le(9)).and(NAME.ne(""));
        let (sql, _) = render(&expression);
        assert_eq!(sql, r#""id" >= ? AND "id" <= ? AND "name" != ?"#);
    }

    #[test]
    fn parameters_bind_left_to_right() {
        let expression = AGE.gt(30).and(AGE.lt(40)).or(NAME.eq("admin"));
        let (_, params) = render(&expression);
        assert_eq!(
            params,
            vec![
                Value::Integer(Some(30)),
                Value::Integer(Some(40)),
                Value::Text(Some("admin".into())),
            ]
        );
    }

    #[test]
    fn null_literal_comparison() {
        let expression = NAME.eq(Option::<String>::None);
        let (sql, params) = render(&expression);
        assert_eq!(sql, r#""name" = ?"#);
        assert_eq!(params, vec![Value::Text(None)]);
    }
}
