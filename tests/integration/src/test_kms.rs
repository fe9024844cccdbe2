//! KMS integration tests.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use nimbus_kms::types::{KeySpec, KeyUsageType, MessageType, SigningAlgorithmSpec};
    use nimbus_kms::{
        CreateAliasRequest, CreateKeyRequest, DecryptRequest, EncryptRequest, SignRequest,
        VerifyRequest,
    };

    use crate::{kms_client, mock_transport};

    #[tokio::test]
    async fn test_should_encrypt_then_decrypt() -> anyhow::Result<()> {
        let mock = mock_transport();
        mock.push_json(
            200,
            r#"{"CiphertextBlob":"Y2lwaGVy","KeyId":"arn:aws:kms:us-west-2:111122223333:key/k1","EncryptionAlgorithm":"SYMMETRIC_DEFAULT"}"#,
        );
        mock.push_json(
            200,
            r#"{"Plaintext":"c2VjcmV0","KeyId":"arn:aws:kms:us-west-2:111122223333:key/k1","EncryptionAlgorithm":"SYMMETRIC_DEFAULT"}"#,
        );
        let kms = kms_client(&mock);

        let encrypted = kms
            .encrypt(EncryptRequest {
                key_id: Some("alias/app".to_owned()),
                plaintext: Some(Bytes::from_static(b"secret")),
                ..Default::default()
            })
            .await?
            .into_output()?;
        let ciphertext = encrypted.ciphertext_blob.clone().expect("ciphertext");
        assert_eq!(&ciphertext[..], b"cipher");

        let decrypted = kms
            .decrypt(DecryptRequest {
                ciphertext_blob: Some(ciphertext),
                ..Default::default()
            })
            .await?
            .into_output()?;
        assert_eq!(decrypted.plaintext.as_deref(), Some(&b"secret"[..]));

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].json()["Plaintext"], "c2VjcmV0");
        assert_eq!(requests[1].json()["CiphertextBlob"], "Y2lwaGVy");
        assert_eq!(requests[1].header("x-amz-target"), Some("TrentService.Decrypt"));
        Ok(())
    }

    #[tokio::test]
    async fn test_should_create_signing_key_and_alias() -> anyhow::Result<()> {
        let mock = mock_transport();
        mock.push_json(
            200,
            r#"{"KeyMetadata":{"KeyId":"k2","KeyUsage":"SIGN_VERIFY","KeySpec":"ECC_NIST_P256","Enabled":true,"CreationDate":1700000000}}"#,
        );
        mock.push_json(200, "");
        let kms = kms_client(&mock);

        let created = kms
            .create_key(CreateKeyRequest {
                key_usage: Some(KeyUsageType::SignVerify),
                key_spec: Some(KeySpec::EccNistP256),
                description: Some("release signing".to_owned()),
                ..Default::default()
            })
            .await?
            .into_output()?;
        let metadata = created.key_metadata.expect("metadata");
        assert_eq!(metadata.key_id.as_deref(), Some("k2"));
        assert_eq!(metadata.key_spec, Some(KeySpec::EccNistP256));

        kms.create_alias(CreateAliasRequest {
            alias_name: Some("alias/release".to_owned()),
            target_key_id: metadata.key_id.clone(),
            ..Default::default()
        })
        .await?
        .into_output()?;

        let body = mock.last_request().expect("request").json();
        assert_eq!(body["AliasName"], "alias/release");
        assert_eq!(body["TargetKeyId"], "k2");
        Ok(())
    }

    #[tokio::test]
    async fn test_should_sign_and_verify_digest() -> anyhow::Result<()> {
        let mock = mock_transport();
        mock.push_json(
            200,
            r#"{"KeyId":"k2","Signature":"c2ln","SigningAlgorithm":"ECDSA_SHA_256"}"#,
        );
        mock.push_json(
            200,
            r#"{"KeyId":"k2","SignatureValid":true,"SigningAlgorithm":"ECDSA_SHA_256"}"#,
        );
        let kms = kms_client(&mock);
        let digest = Bytes::from(vec![7u8; 32]);

        let signed = kms
            .sign(SignRequest {
                key_id: Some("k2".to_owned()),
                message: Some(digest.clone()),
                message_type: Some(MessageType::Digest),
                signing_algorithm: Some(SigningAlgorithmSpec::EcdsaSha256),
                ..Default::default()
            })
            .await?
            .into_output()?;
        let signature = signed.signature.expect("signature");

        let verified = kms
            .verify(VerifyRequest {
                key_id: Some("k2".to_owned()),
                message: Some(digest),
                message_type: Some(MessageType::Digest),
                signature: Some(signature),
                signing_algorithm: Some(SigningAlgorithmSpec::EcdsaSha256),
                ..Default::default()
            })
            .await?
            .into_output()?;
        assert_eq!(verified.signature_valid, Some(true));

        let verify_body = mock.last_request().expect("request").json();
        assert_eq!(verify_body["MessageType"], "DIGEST");
        assert_eq!(verify_body["Signature"], "c2ln");
        Ok(())
    }

    #[tokio::test]
    async fn test_should_route_per_request_region() -> anyhow::Result<()> {
        let mock = mock_transport();
        mock.push_json(200, r#"{"CiphertextBlob":"AA=="}"#);

        kms_client(&mock)
            .encrypt(EncryptRequest {
                key_id: Some("k".to_owned()),
                plaintext: Some(Bytes::from_static(b"x")),
                region: Some("eu-central-1-fips".to_owned()),
                ..Default::default()
            })
            .await?;

        let request = mock.last_request().expect("request");
        assert_eq!(request.uri, "https://kms-fips.eu-central-1.amazonaws.com/");
        let context = &mock.contexts()[0];
        assert_eq!(context.region, "eu-central-1-fips");
        assert_eq!(context.signing_region, "eu-central-1");
        Ok(())
    }
}
