use crate::ast;
use crate::schema::Schema;
use crate::validation::ValidationError;
use crate::validation::ValidationErrorType;
use crate::validation::Validator;

pub(crate) const PETS_SCHEMA_SDL: &str = r#"
enum DogCommand { SIT HEEL DOWN }

interface Pet {
  name: String
}

type Dog implements Pet {
  name: String
  nickname: String
  barkVolume: Int
  doesKnowCommand(dogCommand: DogCommand!): Boolean!
  isHousetrained(atOtherHomes: Boolean = true): Boolean!
  owner: Human
}

type Cat implements Pet {
  name: String
  meows: Boolean
  meowVolume: Int
}

union CatOrDog = Cat | Dog

type Human {
  name(surname: Boolean): String
  pets: [Pet]
  relatives: [Human]
}

input ComplexInput {
  requiredField: Boolean!
  intField: Int
  stringField: String
  stringListField: [String]
}

type ComplicatedArgs {
  intArgField(intArg: Int): String
  nonNullIntArgField(nonNullIntArg: Int!): String
  stringListArgField(stringListArg: [String]): String
  complexArgField(complexArg: ComplexInput): String
  multipleReqs(req1: Int!, req2: Int!): String
  optionalNonNullIntArgField(intArg: Int! = 0): String
}

type Query {
  dog: Dog
  cat: Cat
  pet: Pet
  catOrDog: CatOrDog
  human(id: ID): Human
  complicatedArgs: ComplicatedArgs
}

type Mutation {
  renameDog(name: String!): Dog
}
"#;

pub(crate) fn pets_schema() -> Schema {
    Schema::builder()
        .load_str(None, PETS_SCHEMA_SDL)
        .unwrap()
        .build()
        .unwrap()
}

pub(crate) fn parse(query: &str) -> ast::Node {
    ast::parse_document(query, None).unwrap()
}

/// Validates `query` against [`pets_schema()`] with the standard rules.
pub(crate) fn validate(query: &str) -> Vec<ValidationError> {
    Validator::new().validate(&pets_schema(), &parse(query))
}

pub(crate) fn error_kinds(errors: &[ValidationError]) -> Vec<ValidationErrorType> {
    errors.iter().map(|err| err.kind).collect()
}
